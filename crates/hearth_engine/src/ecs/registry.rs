//! Entity registry and component storage
//!
//! Owns all entity identities and all component memory: a dense array of
//! live entity ids in lockstep with one ownership mask per entity, plus one
//! typed fixed-capacity pool per component kind. Both the entity array and
//! the pools compact with swap-remove, trading order stability for O(1)
//! removal and cache-friendly sweeps.

use log::{debug, error, warn};

use crate::config::WorldConfig;

use super::component::{Component, ComponentKind, ComponentMask};
use super::components::{
    AnimationComponent, ColliderComponent, FarmingComponent, InteractableComponent, ItemComponent,
    NpcComponent, PlayerComponent, SpriteComponent, TransformComponent,
};
use super::entity::EntityId;
use super::pool::ComponentPool;

/// Errors reported by registry operations.
///
/// Every failure is recoverable by the caller; none of these terminate the
/// process. [`EcsError::StorageInconsistency`] signals a bug in the storage
/// layer itself rather than caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// Operation referenced an entity id that is not registered
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// The entity already owns a component of this kind
    #[error("entity {entity} already has a {kind:?} component")]
    DuplicateComponent {
        /// Entity the add was attempted on
        entity: EntityId,
        /// Kind that was already present
        kind: ComponentKind,
    },

    /// The registry is at its configured entity limit
    #[error("entity limit reached ({0})")]
    EntityLimit(usize),

    /// The pool for a component kind is at its configured limit
    #[error("{kind:?} pool is full ({capacity})")]
    PoolLimit {
        /// Kind whose pool is exhausted
        kind: ComponentKind,
        /// The pool's fixed capacity
        capacity: usize,
    },

    /// The operation required a component the entity does not own
    #[error("entity {entity} has no {kind:?} component")]
    MissingComponent {
        /// Entity the operation referenced
        entity: EntityId,
        /// Kind that was absent
        kind: ComponentKind,
    },

    /// The mask claims a component exists but the pool scan cannot find it
    #[error("storage inconsistency: {kind:?} for entity {entity} missing from pool")]
    StorageInconsistency {
        /// Entity whose mask and pool disagree
        entity: EntityId,
        /// Kind affected
        kind: ComponentKind,
    },
}

mod private {
    /// Seals [`Stored`](super::Stored) to the component kinds declared in
    /// this crate.
    pub trait Sealed {}
}

/// Routing from a concrete component type to its pool in the registry.
///
/// Implemented for every declared component kind and sealed against outside
/// implementations; the set of pools is closed by construction.
pub trait Stored: Component + private::Sealed + Sized {
    #[doc(hidden)]
    fn pool(registry: &EntityRegistry) -> &ComponentPool<Self>;

    #[doc(hidden)]
    fn pool_mut(registry: &mut EntityRegistry) -> &mut ComponentPool<Self>;
}

/// Declares one typed pool per [`ComponentKind`] variant. The exhaustive
/// matches it expands keep the kind set and the pool set in sync: a kind
/// without a pool is a compile error, not a bad size-table lookup.
macro_rules! pools {
    ($(($field:ident, $ty:ty, $kind:ident)),+ $(,)?) => {
        struct ComponentStore {
            $($field: ComponentPool<$ty>,)+
        }

        impl ComponentStore {
            fn with_capacity(capacity: usize) -> Self {
                Self {
                    $($field: ComponentPool::with_capacity(capacity),)+
                }
            }
        }

        impl EntityRegistry {
            fn remove_from_pool(&mut self, kind: ComponentKind, entity: EntityId) -> bool {
                match kind {
                    $(ComponentKind::$kind => self.store.$field.remove(entity).is_some(),)+
                }
            }

            /// Number of live instances in the pool for `kind`
            pub fn pool_len(&self, kind: ComponentKind) -> usize {
                match kind {
                    $(ComponentKind::$kind => self.store.$field.len(),)+
                }
            }
        }

        $(
            impl private::Sealed for $ty {}

            impl Stored for $ty {
                fn pool(registry: &EntityRegistry) -> &ComponentPool<Self> {
                    &registry.store.$field
                }

                fn pool_mut(registry: &mut EntityRegistry) -> &mut ComponentPool<Self> {
                    &mut registry.store.$field
                }
            }
        )+
    };
}

pools! {
    (transforms, TransformComponent, Transform),
    (sprites, SpriteComponent, Sprite),
    (colliders, ColliderComponent, Collider),
    (players, PlayerComponent, Player),
    (npcs, NpcComponent, Npc),
    (items, ItemComponent, Item),
    (farming, FarmingComponent, Farming),
    (interactables, InteractableComponent, Interactable),
    (animations, AnimationComponent, Animation),
}

/// The entity/component database.
///
/// Allocated once from a [`WorldConfig`] with fixed capacities; exceeding a
/// capacity is a reported failure, never growth or silent truncation.
pub struct EntityRegistry {
    entities: Vec<EntityId>,
    masks: Vec<ComponentMask>,
    next_id: u32,
    max_entities: usize,
    store: ComponentStore,
}

impl EntityRegistry {
    /// Create an empty registry sized by `config`
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            entities: Vec::with_capacity(config.max_entities),
            masks: Vec::with_capacity(config.max_entities),
            next_id: 1, // 0 is the reserved invalid id
            max_entities: config.max_entities,
            store: ComponentStore::with_capacity(config.max_components_per_kind),
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when no entities are alive
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entity ids, in registry (creation/compaction) order
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    fn index_of(&self, entity: EntityId) -> Option<usize> {
        self.entities.iter().position(|&id| id == entity)
    }

    /// Create a new entity with no components.
    ///
    /// Ids are monotonic and never reused; fails once the configured entity
    /// limit is reached.
    pub fn create(&mut self) -> Result<EntityId, EcsError> {
        if self.entities.len() >= self.max_entities {
            error!("cannot create entity: limit reached ({})", self.max_entities);
            return Err(EcsError::EntityLimit(self.max_entities));
        }

        let entity = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.push(entity);
        self.masks.push(ComponentMask::empty());

        debug!("created entity {entity}");
        Ok(entity)
    }

    /// Destroy an entity and every component it owns.
    ///
    /// Removal is driven by the entity's mask, so the order in which kinds
    /// are dropped does not matter. The entity slot compacts with
    /// swap-remove; registry order changes.
    pub fn destroy(&mut self, entity: EntityId) -> Result<(), EcsError> {
        let Some(index) = self.index_of(entity) else {
            warn!("attempted to destroy unknown entity {entity}");
            return Err(EcsError::UnknownEntity(entity));
        };

        let mask = self.masks[index];
        for kind in mask.kinds() {
            // Failures are logged inside; a storage inconsistency on one
            // pool must not leak the remaining components.
            let _ = self.remove_component(entity, kind);
        }

        self.entities.swap_remove(index);
        self.masks.swap_remove(index);

        debug!("destroyed entity {entity}");
        Ok(())
    }

    /// True when `entity` is currently alive
    pub fn exists(&self, entity: EntityId) -> bool {
        self.index_of(entity).is_some()
    }

    /// Attach a component to the entity stamped in its header.
    ///
    /// Fails when the entity is unknown, already owns the kind, or the
    /// kind's pool is full.
    pub fn add_component<C: Stored>(&mut self, component: C) -> Result<(), EcsError> {
        let entity = component.entity();
        let kind = C::KIND;

        let Some(index) = self.index_of(entity) else {
            warn!("attempted to add {kind:?} component to unknown entity {entity}");
            return Err(EcsError::UnknownEntity(entity));
        };

        if self.masks[index].contains(kind.bit()) {
            warn!("entity {entity} already has a {kind:?} component");
            return Err(EcsError::DuplicateComponent { entity, kind });
        }

        if C::pool(self).is_full() {
            let capacity = C::pool(self).capacity();
            error!("{kind:?} pool is full ({capacity})");
            return Err(EcsError::PoolLimit { kind, capacity });
        }

        let inserted = C::pool_mut(self).insert(component);
        debug_assert!(inserted, "pool rejected insert after capacity check");
        self.masks[index].insert(kind.bit());

        debug!("added {kind:?} component to entity {entity}");
        Ok(())
    }

    /// Detach the component of `kind` from `entity`.
    ///
    /// The freed pool slot is filled by the pool's last live instance, so
    /// pool order changes and outstanding component borrows end here.
    pub fn remove_component(
        &mut self,
        entity: EntityId,
        kind: ComponentKind,
    ) -> Result<(), EcsError> {
        let Some(index) = self.index_of(entity) else {
            warn!("attempted to remove {kind:?} component from unknown entity {entity}");
            return Err(EcsError::UnknownEntity(entity));
        };

        if !self.masks[index].contains(kind.bit()) {
            warn!("entity {entity} has no {kind:?} component to remove");
            return Err(EcsError::MissingComponent { entity, kind });
        }

        if !self.remove_from_pool(kind, entity) {
            error!("storage inconsistency: {kind:?} for entity {entity} missing from pool");
            return Err(EcsError::StorageInconsistency { entity, kind });
        }

        self.masks[index].remove(kind.bit());

        debug!("removed {kind:?} component from entity {entity}");
        Ok(())
    }

    /// Component of type `C` owned by `entity`.
    ///
    /// The borrow ends at the next structural mutation of the registry;
    /// keep the [`EntityId`] and re-look-up instead of holding on.
    pub fn get_component<C: Stored>(&self, entity: EntityId) -> Option<&C> {
        let index = self.index_of(entity)?;
        if !self.masks[index].contains(C::KIND.bit()) {
            return None;
        }

        let found = C::pool(self).get(entity);
        if found.is_none() {
            error!(
                "storage inconsistency: {:?} for entity {entity} missing from pool",
                C::KIND
            );
        }
        found
    }

    /// Mutable access to the component of type `C` owned by `entity`.
    ///
    /// This is the only mutation path for component state short of removing
    /// and re-adding the component.
    pub fn get_component_mut<C: Stored>(&mut self, entity: EntityId) -> Option<&mut C> {
        let index = self.index_of(entity)?;
        if !self.masks[index].contains(C::KIND.bit()) {
            return None;
        }

        if C::pool(self).get(entity).is_none() {
            error!(
                "storage inconsistency: {:?} for entity {entity} missing from pool",
                C::KIND
            );
            return None;
        }
        C::pool_mut(self).get_mut(entity)
    }

    /// True when `entity` owns a component of `kind`
    pub fn has_component(&self, entity: EntityId, kind: ComponentKind) -> bool {
        self.index_of(entity)
            .is_some_and(|index| self.masks[index].contains(kind.bit()))
    }

    /// The entity's ownership mask; empty for unknown entities
    pub fn mask(&self, entity: EntityId) -> ComponentMask {
        self.index_of(entity)
            .map_or_else(ComponentMask::empty, |index| self.masks[index])
    }

    /// Entities whose mask contains every kind in `mask`, in registry order.
    ///
    /// Collects at most `limit` ids; a single call is a complete snapshot
    /// at call time, there is no paging.
    pub fn find_with_components(&self, mask: ComponentMask, limit: usize) -> Vec<EntityId> {
        let mut out = Vec::new();
        self.find_with_components_into(mask, limit, &mut out);
        out
    }

    /// Like [`find_with_components`](Self::find_with_components) but reuses
    /// `out` as the result buffer (cleared first). Returns the match count.
    pub fn find_with_components_into(
        &self,
        mask: ComponentMask,
        limit: usize,
        out: &mut Vec<EntityId>,
    ) -> usize {
        out.clear();
        for (&entity, &entity_mask) in self.entities.iter().zip(&self.masks) {
            if out.len() >= limit {
                break;
            }
            if entity_mask.contains(mask) {
                out.push(entity);
            }
        }
        out.len()
    }

    /// Read access to the pool for component type `C`, for whole-pool sweeps
    pub fn pool<C: Stored>(&self) -> &ComponentPool<C> {
        C::pool(self)
    }

    /// Mutable access to the pool for component type `C`
    pub fn pool_mut<C: Stored>(&mut self) -> &mut ComponentPool<C> {
        C::pool_mut(self)
    }
}
