//! Entity-level collision queries and movement resolution

use crate::config::WorldConfig;
use crate::ecs::components::{ColliderComponent, TransformComponent};
use crate::ecs::{ComponentMask, EntityId, EntityRegistry};
use crate::foundation::math::Vec2;

use super::collision::{Aabb, CollisionHit, CollisionKind};
use super::collision_layers::CollisionLayers;

/// Mask selecting entities that can participate in collision queries
const COLLIDABLE: ComponentMask = ComponentMask::TRANSFORM.union(ComponentMask::COLLIDER);

/// Collision queries and axis-separated movement over an [`EntityRegistry`].
///
/// Holds no world state of its own, only configuration and a scratch buffer
/// for registry scans; every call re-reads current component data, so
/// within an update pass earlier-moved entities are visible to later
/// checks.
pub struct CollisionSystem {
    max_results: usize,
    query_buf: Vec<EntityId>,
}

impl CollisionSystem {
    /// Create a collision system sized by `config`
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            max_results: config.max_collision_results,
            query_buf: Vec::new(),
        }
    }

    /// Cap on hits collected by a single position-validity check
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// World-space bounding box for `entity`.
    ///
    /// `None` unless the entity has both a Transform and a Collider. The
    /// box is centered on the transform position plus the collider offset.
    pub fn entity_bounds(&self, registry: &EntityRegistry, entity: EntityId) -> Option<Aabb> {
        let transform = registry.get_component::<TransformComponent>(entity)?;
        let collider = registry.get_component::<ColliderComponent>(entity)?;

        Some(Aabb::new(
            transform.position.x + collider.offset.x - collider.width / 2.0,
            transform.position.y + collider.offset.y - collider.height / 2.0,
            collider.width,
            collider.height,
        ))
    }

    /// Collect every overlap against `entity`, up to `max_results` hits.
    ///
    /// Scans all collidable entities, skipping `entity` itself and any
    /// collider whose layer is excluded by `entity`'s collision mask. The
    /// filter is directional: the other collider's mask is never consulted.
    /// An entity without bounds produces no hits.
    pub fn check_entity_collisions(
        &mut self,
        registry: &EntityRegistry,
        entity: EntityId,
        max_results: usize,
    ) -> Vec<CollisionHit> {
        let mut hits = Vec::new();

        let Some(bounds) = self.entity_bounds(registry, entity) else {
            return hits;
        };
        let Some(collider) = registry.get_component::<ColliderComponent>(entity) else {
            return hits;
        };
        let collision_mask = collider.mask;

        let mut candidates = std::mem::take(&mut self.query_buf);
        registry.find_with_components_into(COLLIDABLE, registry.len(), &mut candidates);

        for &other in &candidates {
            if hits.len() >= max_results {
                break;
            }
            if other == entity {
                continue;
            }

            let Some(other_collider) = registry.get_component::<ColliderComponent>(other) else {
                continue;
            };
            if !CollisionLayers::matches(collision_mask, other_collider.layer) {
                continue;
            }
            let kind = other_collider.kind;

            let Some(other_bounds) = self.entity_bounds(registry, other) else {
                continue;
            };
            if let Some(penetration) = bounds.penetration(&other_bounds) {
                hits.push(CollisionHit {
                    entity: other,
                    kind,
                    penetration,
                });
            }
        }

        self.query_buf = candidates;
        hits
    }

    /// True when `entity` placed at `(x, y)` would overlap nothing that
    /// blocks it.
    ///
    /// The entity's transform is temporarily moved to the candidate
    /// position for the check and restored before returning. Overlaps
    /// against `ignore` and against trigger colliders never invalidate a
    /// position; an entity without a Transform has no valid positions.
    pub fn is_position_valid(
        &mut self,
        registry: &mut EntityRegistry,
        entity: EntityId,
        x: f32,
        y: f32,
        ignore: Option<EntityId>,
    ) -> bool {
        let original = match registry.get_component_mut::<TransformComponent>(entity) {
            Some(transform) => {
                let original = transform.position;
                transform.position = Vec2::new(x, y);
                original
            }
            None => return false,
        };

        let max_results = self.max_results;
        let hits = self.check_entity_collisions(registry, entity, max_results);

        if let Some(transform) = registry.get_component_mut::<TransformComponent>(entity) {
            transform.position = original;
        }

        hits.iter()
            .all(|hit| Some(hit.entity) == ignore || !hit.kind.is_blocking())
    }

    /// Move `entity` by `(dx, dy)`, resolving collisions one axis at a time.
    ///
    /// The X step is attempted first, then the Y step from wherever X
    /// landed, so diagonal motion into a wall slides along it instead of
    /// stopping dead. Large steps can tunnel; there is no swept test.
    ///
    /// Returns false only when the entity has no Transform. A fully blocked
    /// move still returns true; callers compare positions before and after
    /// to learn what actually moved.
    pub fn move_entity(
        &mut self,
        registry: &mut EntityRegistry,
        entity: EntityId,
        dx: f32,
        dy: f32,
    ) -> bool {
        let Some(transform) = registry.get_component::<TransformComponent>(entity) else {
            return false;
        };
        let mut position = transform.position;
        let target = Vec2::new(position.x + dx, position.y + dy);

        if self.is_position_valid(registry, entity, target.x, position.y, None) {
            position.x = target.x;
            if let Some(transform) = registry.get_component_mut::<TransformComponent>(entity) {
                transform.position.x = position.x;
            }
        }

        if self.is_position_valid(registry, entity, position.x, target.y, None) {
            if let Some(transform) = registry.get_component_mut::<TransformComponent>(entity) {
                transform.position.y = target.y;
            }
        }

        true
    }

    /// Bounding boxes of every collidable entity, for debug overlays.
    ///
    /// External renderers color the boxes by collision class; the core only
    /// supplies the data.
    pub fn collider_boxes(
        &mut self,
        registry: &EntityRegistry,
    ) -> Vec<(EntityId, Aabb, CollisionKind)> {
        let mut candidates = std::mem::take(&mut self.query_buf);
        registry.find_with_components_into(COLLIDABLE, registry.len(), &mut candidates);

        let mut boxes = Vec::with_capacity(candidates.len());
        for &entity in &candidates {
            let Some(bounds) = self.entity_bounds(registry, entity) else {
                continue;
            };
            let Some(collider) = registry.get_component::<ColliderComponent>(entity) else {
                continue;
            };
            boxes.push((entity, bounds, collider.kind));
        }

        self.query_buf = candidates;
        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world() -> (EntityRegistry, CollisionSystem) {
        let config = WorldConfig::default();
        (EntityRegistry::new(&config), CollisionSystem::new(&config))
    }

    fn spawn_box(
        registry: &mut EntityRegistry,
        x: f32,
        y: f32,
        size: f32,
        kind: CollisionKind,
    ) -> EntityId {
        let entity = registry.create().unwrap();
        registry
            .add_component(TransformComponent::new(entity, x, y))
            .unwrap();
        registry
            .add_component(ColliderComponent::new(entity, size, size, kind))
            .unwrap();
        entity
    }

    fn position(registry: &EntityRegistry, entity: EntityId) -> Vec2 {
        registry
            .get_component::<TransformComponent>(entity)
            .unwrap()
            .position
    }

    #[test]
    fn test_entity_bounds_centered_on_transform() {
        let (mut registry, collision) = world();
        let entity = registry.create().unwrap();
        registry
            .add_component(TransformComponent::new(entity, 100.0, 50.0))
            .unwrap();
        registry
            .add_component(
                ColliderComponent::new(entity, 20.0, 10.0, CollisionKind::Dynamic)
                    .with_offset(2.0, -4.0),
            )
            .unwrap();

        let bounds = collision.entity_bounds(&registry, entity).unwrap();
        assert_relative_eq!(bounds.x, 100.0 + 2.0 - 10.0);
        assert_relative_eq!(bounds.y, 50.0 - 4.0 - 5.0);
        assert_relative_eq!(bounds.width, 20.0);
        assert_relative_eq!(bounds.height, 10.0);
    }

    #[test]
    fn test_entity_bounds_requires_both_components() {
        let (mut registry, collision) = world();

        let transform_only = registry.create().unwrap();
        registry
            .add_component(TransformComponent::new(transform_only, 0.0, 0.0))
            .unwrap();

        let collider_only = registry.create().unwrap();
        registry
            .add_component(ColliderComponent::new(
                collider_only,
                8.0,
                8.0,
                CollisionKind::Static,
            ))
            .unwrap();

        assert!(collision.entity_bounds(&registry, transform_only).is_none());
        assert!(collision.entity_bounds(&registry, collider_only).is_none());
    }

    #[test]
    fn test_check_collisions_skips_self_and_respects_cap() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        for _ in 0..3 {
            spawn_box(&mut registry, 2.0, 0.0, 10.0, CollisionKind::Static);
        }

        let hits = collision.check_entity_collisions(&registry, mover, 16);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|hit| hit.entity != mover));

        let capped = collision.check_entity_collisions(&registry, mover, 2);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_layer_filtering_is_directional() {
        let (mut registry, mut collision) = world();

        // `ghost` only looks for NPCs; `wall` looks for everything
        let ghost = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        registry
            .get_component_mut::<ColliderComponent>(ghost)
            .unwrap()
            .mask = CollisionLayers::NPC;
        registry
            .get_component_mut::<ColliderComponent>(ghost)
            .unwrap()
            .layer = CollisionLayers::PLAYER;

        let wall = spawn_box(&mut registry, 4.0, 0.0, 10.0, CollisionKind::Static);
        registry
            .get_component_mut::<ColliderComponent>(wall)
            .unwrap()
            .layer = CollisionLayers::ENVIRONMENT;

        let from_ghost = collision.check_entity_collisions(&registry, ghost, 16);
        assert!(from_ghost.is_empty(), "ghost's mask excludes the wall");

        let from_wall = collision.check_entity_collisions(&registry, wall, 16);
        assert_eq!(from_wall.len(), 1);
        assert_eq!(from_wall[0].entity, ghost);
    }

    #[test]
    fn test_is_position_valid_restores_transform() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 3.0, 7.0, 10.0, CollisionKind::Dynamic);
        spawn_box(&mut registry, 50.0, 50.0, 10.0, CollisionKind::Static);

        assert!(!collision.is_position_valid(&mut registry, mover, 50.0, 50.0, None));
        assert!(collision.is_position_valid(&mut registry, mover, 30.0, 30.0, None));

        let pos = position(&registry, mover);
        assert_relative_eq!(pos.x, 3.0);
        assert_relative_eq!(pos.y, 7.0);
    }

    #[test]
    fn test_triggers_never_block() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        let zone = spawn_box(&mut registry, 40.0, 0.0, 10.0, CollisionKind::Trigger);

        assert!(collision.is_position_valid(&mut registry, mover, 40.0, 0.0, None));

        // The same overlap blocks once the zone is solid
        registry
            .get_component_mut::<ColliderComponent>(zone)
            .unwrap()
            .kind = CollisionKind::Static;
        assert!(!collision.is_position_valid(&mut registry, mover, 40.0, 0.0, None));

        // ...and is permitted again when explicitly ignored
        assert!(collision.is_position_valid(&mut registry, mover, 40.0, 0.0, Some(zone)));
    }

    #[test]
    fn test_trigger_overlaps_are_still_reported() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        spawn_box(&mut registry, 4.0, 0.0, 10.0, CollisionKind::Trigger);

        let hits = collision.check_entity_collisions(&registry, mover, 16);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, CollisionKind::Trigger);
    }

    #[test]
    fn test_move_slides_along_a_wall() {
        let (mut registry, mut collision) = world();
        // 10x10 mover at the origin, 10x10 wall flush against its right edge
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        spawn_box(&mut registry, 10.0, 0.0, 10.0, CollisionKind::Static);

        assert!(collision.move_entity(&mut registry, mover, 5.0, 5.0));

        // X is blocked by the wall, Y commits in full
        let pos = position(&registry, mover);
        assert_relative_eq!(pos.x, 0.0);
        assert_relative_eq!(pos.y, 5.0);
    }

    #[test]
    fn test_move_commits_both_axes_when_clear() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        spawn_box(&mut registry, 100.0, 100.0, 10.0, CollisionKind::Static);

        assert!(collision.move_entity(&mut registry, mover, 12.5, -3.0));

        let pos = position(&registry, mover);
        assert_relative_eq!(pos.x, 12.5);
        assert_relative_eq!(pos.y, -3.0);
    }

    #[test]
    fn test_fully_blocked_move_reports_success() {
        let (mut registry, mut collision) = world();
        let mover = spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Dynamic);
        spawn_box(&mut registry, 10.0, 0.0, 10.0, CollisionKind::Static);
        spawn_box(&mut registry, 0.0, 10.0, 10.0, CollisionKind::Static);

        // Both axes rejected, yet the call succeeds; the caller learns the
        // outcome by comparing positions.
        assert!(collision.move_entity(&mut registry, mover, 5.0, 5.0));

        let pos = position(&registry, mover);
        assert_relative_eq!(pos.x, 0.0);
        assert_relative_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_move_without_transform_fails() {
        let (mut registry, mut collision) = world();
        let bodiless = registry.create().unwrap();

        assert!(!collision.move_entity(&mut registry, bodiless, 1.0, 1.0));
    }

    #[test]
    fn test_entity_without_collider_moves_freely() {
        let (mut registry, mut collision) = world();
        let spirit = registry.create().unwrap();
        registry
            .add_component(TransformComponent::new(spirit, 0.0, 0.0))
            .unwrap();
        spawn_box(&mut registry, 10.0, 0.0, 10.0, CollisionKind::Static);

        assert!(collision.move_entity(&mut registry, spirit, 10.0, 0.0));
        assert_relative_eq!(position(&registry, spirit).x, 10.0);
    }

    #[test]
    fn test_collider_boxes_for_debug_overlay() {
        let (mut registry, mut collision) = world();
        spawn_box(&mut registry, 0.0, 0.0, 10.0, CollisionKind::Static);
        spawn_box(&mut registry, 20.0, 0.0, 10.0, CollisionKind::Trigger);
        registry.create().unwrap(); // not collidable, must not appear

        let boxes = collision.collider_boxes(&registry);
        assert_eq!(boxes.len(), 2);
        assert!(boxes
            .iter()
            .any(|(_, _, kind)| *kind == CollisionKind::Trigger));
    }
}
