//! # Hearth Engine
//!
//! Runtime core for a 2D tile-based life-simulation game: an in-memory
//! entity/component database plus the axis-aligned collision and movement
//! resolution engine built on top of it.
//!
//! ## Subsystems
//!
//! - **ECS**: fixed-capacity entity registry, typed component pools with
//!   swap-remove compaction, and bitmask-based multi-component queries
//! - **Physics**: AABB derivation from components, pairwise overlap tests
//!   with minimum-penetration vectors, and axis-separated movement
//!   resolution for player/NPC locomotion
//!
//! Gameplay systems (farming, tools, inventory, rendering, map import) are
//! external callers: they create entities, attach components, and consult
//! the collision layer, but live outside this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use hearth_engine::prelude::*;
//!
//! let config = WorldConfig::default();
//! let mut registry = EntityRegistry::new(&config);
//! let mut collision = CollisionSystem::new(&config);
//!
//! let player = registry.create().unwrap();
//! registry.add_component(TransformComponent::new(player, 64.0, 64.0)).unwrap();
//! registry
//!     .add_component(ColliderComponent::new(player, 12.0, 12.0, CollisionKind::Dynamic))
//!     .unwrap();
//!
//! collision.move_entity(&mut registry, player, 3.0, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, WorldConfig},
        ecs::{
            components::{
                AnimationClip, AnimationComponent, ColliderComponent, FarmingComponent,
                InteractableComponent, ItemComponent, NpcBehavior, NpcComponent, PlayerComponent,
                SpriteComponent, Tool, ToolKind, TransformComponent,
            },
            Component, ComponentKind, ComponentMask, EcsError, EntityId, EntityRegistry, Query,
        },
        foundation::math::Vec2,
        physics::{Aabb, CollisionHit, CollisionKind, CollisionLayers, CollisionSystem},
    };
}
