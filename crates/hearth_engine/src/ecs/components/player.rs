//! Player component

use crate::ecs::{Component, ComponentKind, EntityId};

/// State specific to the player character.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerComponent {
    entity: EntityId,

    /// Movement speed in pixels per second
    pub move_speed: f32,

    /// Current stamina, spent by tool use
    pub stamina: i32,

    /// Stamina ceiling
    pub max_stamina: i32,

    /// Current health
    pub health: i32,

    /// Health ceiling
    pub max_health: i32,
}

impl PlayerComponent {
    /// Create a player at full stamina and health
    pub fn new(entity: EntityId, move_speed: f32) -> Self {
        Self {
            entity,
            move_speed,
            stamina: 100,
            max_stamina: 100,
            health: 100,
            max_health: 100,
        }
    }

    /// Set the stamina pool (current and ceiling)
    pub fn with_stamina(mut self, max_stamina: i32) -> Self {
        self.stamina = max_stamina;
        self.max_stamina = max_stamina;
        self
    }

    /// Set the health pool (current and ceiling)
    pub fn with_health(mut self, max_health: i32) -> Self {
        self.health = max_health;
        self.max_health = max_health;
        self
    }
}

impl Component for PlayerComponent {
    const KIND: ComponentKind = ComponentKind::Player;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
