//! Collision layer registry for overlap filtering

/// Named collision layer bits for the farm-sim world.
///
/// A collider lives on one or more layers (`layer` bits) and declares which
/// layers its own queries care about (`mask` bits). Filtering is
/// directional: only the querying collider's mask is consulted, so A can
/// report overlaps with B while B's queries ignore A entirely.
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Player character
    pub const PLAYER: u32 = 1 << 0;

    /// Villagers and other NPCs
    pub const NPC: u32 = 1 << 1;

    /// Static world geometry (fences, buildings, water edges)
    pub const ENVIRONMENT: u32 = 1 << 2;

    /// Dropped items waiting for pickup
    pub const ITEM: u32 = 1 << 3;

    /// Planted crops and tilled soil
    pub const CROP: u32 = 1 << 4;

    /// Interaction trigger zones (doors, signs, zone transitions)
    pub const TRIGGER_ZONE: u32 = 1 << 5;

    /// User-defined custom layer
    pub const CUSTOM_8: u32 = 1 << 8;
    /// User-defined custom layer
    pub const CUSTOM_9: u32 = 1 << 9;
    /// User-defined custom layer
    pub const CUSTOM_10: u32 = 1 << 10;
    /// User-defined custom layer
    pub const CUSTOM_11: u32 = 1 << 11;

    /// True when a query running with `mask` reports colliders on `layer`.
    ///
    /// Only the querying side's mask is consulted; see the type-level note
    /// on directionality.
    pub fn matches(mask: u32, layer: u32) -> bool {
        (mask & layer) != 0
    }

    /// Combine several layers into a mask
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_directional() {
        // The player's queries see the environment...
        let player_mask = CollisionLayers::mask(&[CollisionLayers::ENVIRONMENT, CollisionLayers::NPC]);
        assert!(CollisionLayers::matches(player_mask, CollisionLayers::ENVIRONMENT));

        // ...but an environment collider that only cares about NPCs does
        // not see the player.
        let fence_mask = CollisionLayers::NPC;
        assert!(!CollisionLayers::matches(fence_mask, CollisionLayers::PLAYER));
    }

    #[test]
    fn test_mask_combination() {
        let mask = CollisionLayers::mask(&[
            CollisionLayers::PLAYER,
            CollisionLayers::NPC,
            CollisionLayers::CROP,
        ]);

        assert_eq!(
            mask,
            CollisionLayers::PLAYER | CollisionLayers::NPC | CollisionLayers::CROP
        );
        assert!(!CollisionLayers::matches(mask, CollisionLayers::ITEM));
    }

    #[test]
    fn test_none_and_all() {
        assert!(!CollisionLayers::matches(CollisionLayers::NONE, CollisionLayers::PLAYER));
        assert!(CollisionLayers::matches(CollisionLayers::ALL, CollisionLayers::TRIGGER_ZONE));
    }
}
