//! Sprite component: visual representation

use crate::ecs::{Component, ComponentKind, EntityId};

/// What an entity looks like on screen.
///
/// Rendering itself lives outside the core; this is the data the renderer
/// reads when it sweeps the sprite pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteComponent {
    entity: EntityId,

    /// Texture the sprite samples from
    pub texture_id: u32,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Column of the cell in the sprite sheet
    pub sheet_x: u32,

    /// Row of the cell in the sprite sheet
    pub sheet_y: u32,

    /// Draw order; higher values draw on top
    pub z_order: i32,

    /// Whether the sprite is drawn at all
    pub visible: bool,
}

impl SpriteComponent {
    /// Create a visible sprite reading the sheet's top-left cell
    pub fn new(entity: EntityId, texture_id: u32, width: u32, height: u32) -> Self {
        Self {
            entity,
            texture_id,
            width,
            height,
            sheet_x: 0,
            sheet_y: 0,
            z_order: 0,
            visible: true,
        }
    }

    /// Select a cell in the sprite sheet
    pub fn with_sheet_cell(mut self, x: u32, y: u32) -> Self {
        self.sheet_x = x;
        self.sheet_y = y;
        self
    }

    /// Set the draw order
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }
}

impl Component for SpriteComponent {
    const KIND: ComponentKind = ComponentKind::Sprite;

    fn entity(&self) -> EntityId {
        self.entity
    }
}
