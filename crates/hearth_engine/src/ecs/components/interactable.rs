//! Interactable component: objects the player can activate

use crate::ecs::{Component, ComponentKind, EntityId};

/// Marks an entity the player can interact with (doors, signs, chests).
#[derive(Debug, Clone, PartialEq)]
pub struct InteractableComponent {
    entity: EntityId,

    /// Whether interaction is currently allowed
    pub active: bool,

    /// How close the player must be, in pixels
    pub radius: f32,

    /// Gameplay-defined interaction identifier
    pub interaction_id: u32,
}

impl InteractableComponent {
    /// Create an active interactable
    pub fn new(entity: EntityId, interaction_id: u32, radius: f32) -> Self {
        Self {
            entity,
            active: true,
            radius,
            interaction_id,
        }
    }
}

impl Component for InteractableComponent {
    const KIND: ComponentKind = ComponentKind::Interactable;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
