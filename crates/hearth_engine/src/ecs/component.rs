//! Component kinds, ownership masks, and the component trait

use bitflags::bitflags;

use super::entity::EntityId;

/// Closed set of component kinds known to the engine.
///
/// Every kind has a dedicated pool in the registry; adding a variant here
/// without wiring a pool is a compile error, not a latent lookup bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Position, rotation, scale
    Transform,
    /// Visual representation
    Sprite,
    /// Collision shape and filtering
    Collider,
    /// Player-specific data
    Player,
    /// NPC-specific data
    Npc,
    /// Objects that can be picked up
    Item,
    /// Crops and farmland
    Farming,
    /// Interactive objects
    Interactable,
    /// Sprite-sheet animation state
    Animation,
}

impl ComponentKind {
    /// Number of component kinds
    pub const COUNT: usize = 9;

    /// Every kind, in mask-bit order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Transform,
        Self::Sprite,
        Self::Collider,
        Self::Player,
        Self::Npc,
        Self::Item,
        Self::Farming,
        Self::Interactable,
        Self::Animation,
    ];

    /// Mask with only this kind's bit set
    pub fn bit(self) -> ComponentMask {
        match self {
            Self::Transform => ComponentMask::TRANSFORM,
            Self::Sprite => ComponentMask::SPRITE,
            Self::Collider => ComponentMask::COLLIDER,
            Self::Player => ComponentMask::PLAYER,
            Self::Npc => ComponentMask::NPC,
            Self::Item => ComponentMask::ITEM,
            Self::Farming => ComponentMask::FARMING,
            Self::Interactable => ComponentMask::INTERACTABLE,
            Self::Animation => ComponentMask::ANIMATION,
        }
    }
}

bitflags! {
    /// Bitset recording which component kinds an entity owns.
    ///
    /// Kept in lockstep with the registry's entity list: bit *k* is set if
    /// and only if exactly one instance owned by that entity exists in the
    /// pool for kind *k*.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentMask: u32 {
        /// Transform bit
        const TRANSFORM = 1 << 0;
        /// Sprite bit
        const SPRITE = 1 << 1;
        /// Collider bit
        const COLLIDER = 1 << 2;
        /// Player bit
        const PLAYER = 1 << 3;
        /// NPC bit
        const NPC = 1 << 4;
        /// Item bit
        const ITEM = 1 << 5;
        /// Farming bit
        const FARMING = 1 << 6;
        /// Interactable bit
        const INTERACTABLE = 1 << 7;
        /// Animation bit
        const ANIMATION = 1 << 8;
    }
}

impl ComponentMask {
    /// Iterate the kinds present in this mask, in mask-bit order
    pub fn kinds(self) -> impl Iterator<Item = ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.bit()))
    }
}

/// Data attached to an entity.
///
/// Every instance embeds the id of its owning entity (the common header);
/// pools are packed arrays searched by that header, not indexed by id.
pub trait Component: 'static {
    /// Kind tag used for mask bits and pool routing
    const KIND: ComponentKind;

    /// Entity this instance is attached to
    fn entity(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_distinct_bit() {
        let mut seen = ComponentMask::empty();
        for kind in ComponentKind::ALL {
            assert!(!seen.intersects(kind.bit()), "{kind:?} bit collides");
            seen |= kind.bit();
        }
        assert_eq!(seen.iter().count(), ComponentKind::COUNT);
    }

    #[test]
    fn test_superset_matching() {
        let entity_mask = ComponentMask::TRANSFORM | ComponentMask::COLLIDER | ComponentMask::SPRITE;
        let wanted = ComponentMask::TRANSFORM | ComponentMask::COLLIDER;

        assert!(entity_mask.contains(wanted));
        assert!(!wanted.contains(entity_mask));
    }

    #[test]
    fn test_kinds_iteration_follows_bit_order() {
        let mask = ComponentMask::ANIMATION | ComponentMask::TRANSFORM | ComponentMask::ITEM;
        let kinds: Vec<_> = mask.kinds().collect();

        assert_eq!(
            kinds,
            vec![
                ComponentKind::Transform,
                ComponentKind::Item,
                ComponentKind::Animation
            ]
        );
    }
}
