//! Item component: objects that can be picked up

use crate::ecs::{Component, ComponentKind, EntityId};

/// Tool categories the tool-use system understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Tills soil
    Hoe,
    /// Waters crops
    WateringCan,
    /// Fells trees
    Axe,
    /// Breaks rocks
    Pickaxe,
    /// Harvests crops
    Scythe,
}

/// Tool data carried by tool items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// What the tool does
    pub kind: ToolKind,
    /// Upgrade level, starting at 0
    pub level: u8,
}

/// A world object that can be picked up into an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemComponent {
    entity: EntityId,

    /// Gameplay-defined item identifier
    pub item_id: u32,

    /// Current stack count
    pub stack_size: u32,

    /// Largest stack the item allows
    pub max_stack_size: u32,

    /// Tool data when the item is a tool
    pub tool: Option<Tool>,
}

impl ItemComponent {
    /// Create a plain stackable item (max stack 99, not a tool)
    pub fn new(entity: EntityId, item_id: u32, stack_size: u32) -> Self {
        Self {
            entity,
            item_id,
            stack_size,
            max_stack_size: 99,
            tool: None,
        }
    }

    /// Set the stack ceiling
    pub fn with_max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    /// Mark the item as a tool; tools do not stack
    pub fn with_tool(mut self, kind: ToolKind, level: u8) -> Self {
        self.tool = Some(Tool { kind, level });
        self.max_stack_size = 1;
        self
    }

    /// True when the item is a tool
    pub fn is_tool(&self) -> bool {
        self.tool.is_some()
    }
}

impl Component for ItemComponent {
    const KIND: ComponentKind = ComponentKind::Item;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
