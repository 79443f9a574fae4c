//! NPC component

use crate::ecs::{Component, ComponentKind, EntityId};
use crate::foundation::math::Vec2;

/// How an NPC decides where to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcBehavior {
    /// Stands still until something external moves it
    Idle,
    /// Picks random points within `wander_radius` of home
    Wander,
    /// Follows a gameplay-defined route
    Patrol,
}

/// State specific to non-player characters.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcComponent {
    entity: EntityId,

    /// Movement speed in pixels per second
    pub move_speed: f32,

    /// Current movement behavior
    pub behavior: NpcBehavior,

    /// Anchor position the NPC returns to
    pub home: Vec2,

    /// Maximum wander distance from home, in pixels
    pub wander_radius: f32,
}

impl NpcComponent {
    /// Create an idle NPC anchored at the origin
    pub fn new(entity: EntityId, move_speed: f32) -> Self {
        Self {
            entity,
            move_speed,
            behavior: NpcBehavior::Idle,
            home: Vec2::new(0.0, 0.0),
            wander_radius: 0.0,
        }
    }

    /// Set the movement behavior
    pub fn with_behavior(mut self, behavior: NpcBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Anchor the NPC at `(x, y)` with the given wander radius
    pub fn with_home(mut self, x: f32, y: f32, wander_radius: f32) -> Self {
        self.home = Vec2::new(x, y);
        self.wander_radius = wander_radius;
        self
    }
}

impl Component for NpcComponent {
    const KIND: ComponentKind = ComponentKind::Npc;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
