//! Transform component: placement on the tile plane

use crate::ecs::{Component, ComponentKind, EntityId};
use crate::foundation::math::Vec2;

/// World-space placement of an entity.
///
/// Coordinates are in pixels with y growing downward; rotation is in
/// degrees. Collision bounds are centered on `position` (plus the
/// collider's offset), so `position` is the entity's center, not a corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    entity: EntityId,

    /// World position in pixels
    pub position: Vec2,

    /// Rotation in degrees
    pub rotation: f32,

    /// Per-axis scale factors
    pub scale: Vec2,
}

impl TransformComponent {
    /// Create a transform at `(x, y)` with no rotation and unit scale
    pub fn new(entity: EntityId, x: f32, y: f32) -> Self {
        Self {
            entity,
            position: Vec2::new(x, y),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set per-axis scale factors
    pub fn with_scale(mut self, x: f32, y: f32) -> Self {
        self.scale = Vec2::new(x, y);
        self
    }
}

impl Component for TransformComponent {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
