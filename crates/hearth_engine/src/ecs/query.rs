//! Mask-based entity queries

use super::component::{ComponentKind, ComponentMask};
use super::entity::EntityId;
use super::registry::EntityRegistry;

/// Builder for "has at least these components" scans.
///
/// An entity matches when its mask is a superset of the requested mask;
/// extra components never disqualify it. Results follow registry order,
/// which changes as entities are destroyed, so no cross-call ordering is
/// guaranteed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query {
    mask: ComponentMask,
}

impl Query {
    /// Start an empty query; with no requirements it matches every entity
    pub fn new() -> Self {
        Self {
            mask: ComponentMask::empty(),
        }
    }

    /// Require a component kind
    pub fn with(mut self, kind: ComponentKind) -> Self {
        self.mask.insert(kind.bit());
        self
    }

    /// The accumulated requirement mask
    pub fn mask(&self) -> ComponentMask {
        self.mask
    }

    /// Run the query, collecting at most `limit` matches
    pub fn run(&self, registry: &EntityRegistry, limit: usize) -> Vec<EntityId> {
        registry.find_with_components(self.mask, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::ecs::components::{SpriteComponent, TransformComponent};

    #[test]
    fn test_query_builds_the_expected_mask() {
        let query = Query::new()
            .with(ComponentKind::Transform)
            .with(ComponentKind::Sprite);

        assert_eq!(
            query.mask(),
            ComponentMask::TRANSFORM | ComponentMask::SPRITE
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let mut registry = EntityRegistry::new(&WorldConfig::default());
        registry.create().unwrap();
        registry.create().unwrap();

        assert_eq!(Query::new().run(&registry, usize::MAX).len(), 2);
    }

    #[test]
    fn test_query_run_filters_and_limits() {
        let mut registry = EntityRegistry::new(&WorldConfig::default());

        for i in 0..4 {
            let entity = registry.create().unwrap();
            registry
                .add_component(TransformComponent::new(entity, 0.0, 0.0))
                .unwrap();
            if i % 2 == 0 {
                registry
                    .add_component(SpriteComponent::new(entity, 1, 16, 16))
                    .unwrap();
            }
        }

        let drawable = Query::new()
            .with(ComponentKind::Transform)
            .with(ComponentKind::Sprite);
        assert_eq!(drawable.run(&registry, usize::MAX).len(), 2);
        assert_eq!(drawable.run(&registry, 1).len(), 1);
    }
}
