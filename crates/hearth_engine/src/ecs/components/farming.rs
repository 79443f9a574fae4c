//! Farming component: crops and farmland

use crate::ecs::{Component, ComponentKind, EntityId};

/// Growth state of a planted crop or tilled tile.
///
/// The farming simulation advances these fields each day; the core only
/// stores them.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmingComponent {
    entity: EntityId,

    /// Gameplay-defined crop identifier
    pub crop_id: u32,

    /// Current growth stage, from 0 (seed)
    pub growth_stage: u8,

    /// Stage at which the crop is fully grown
    pub max_growth_stage: u8,

    /// Seconds until the next stage
    pub growth_timer: f32,

    /// Accumulated hydration
    pub water_level: f32,

    /// Watered today
    pub watered: bool,

    /// Ready to harvest
    pub harvestable: bool,
}

impl FarmingComponent {
    /// Create a freshly planted crop (stage 0 of 5, dry)
    pub fn new(entity: EntityId, crop_id: u32) -> Self {
        Self {
            entity,
            crop_id,
            growth_stage: 0,
            max_growth_stage: 5,
            growth_timer: 0.0,
            water_level: 0.0,
            watered: false,
            harvestable: false,
        }
    }

    /// Set the number of growth stages
    pub fn with_max_growth_stage(mut self, max_growth_stage: u8) -> Self {
        self.max_growth_stage = max_growth_stage;
        self
    }
}

impl Component for FarmingComponent {
    const KIND: ComponentKind = ComponentKind::Farming;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
