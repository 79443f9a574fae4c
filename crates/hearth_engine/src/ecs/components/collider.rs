//! Collider component: collision shape and filtering

use crate::ecs::{Component, ComponentKind, EntityId};
use crate::foundation::math::Vec2;
use crate::physics::collision::CollisionKind;
use crate::physics::collision_layers::CollisionLayers;

/// Axis-aligned collision box attached to an entity.
///
/// The box is centered on the owning transform's position plus `offset`.
/// `mask` decides which layers this entity's own queries report; filtering
/// is directional, so two colliders can disagree about seeing each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderComponent {
    entity: EntityId,

    /// Box width in pixels
    pub width: f32,

    /// Box height in pixels
    pub height: f32,

    /// Offset of the box center from the transform position
    pub offset: Vec2,

    /// How this collider participates in movement resolution
    pub kind: CollisionKind,

    /// Layer bits this collider lives on
    pub layer: u32,

    /// Layer bits this collider's queries collide with
    pub mask: u32,
}

impl ColliderComponent {
    /// Create a collider with no offset, on layer 1, colliding with everything
    pub fn new(entity: EntityId, width: f32, height: f32, kind: CollisionKind) -> Self {
        Self {
            entity,
            width,
            height,
            offset: Vec2::new(0.0, 0.0),
            kind,
            layer: 1,
            mask: CollisionLayers::ALL,
        }
    }

    /// Offset the box center from the transform position
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    /// Set the collider's layer and collision mask
    pub fn with_layers(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// True for overlap-reporting colliders that never block movement
    pub fn is_trigger(&self) -> bool {
        self.kind == CollisionKind::Trigger
    }
}

impl Component for ColliderComponent {
    const KIND: ComponentKind = ComponentKind::Collider;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
