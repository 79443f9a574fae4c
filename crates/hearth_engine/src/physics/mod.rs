//! Collision detection and movement resolution
//!
//! A stateless request/response layer over the entity registry: bounding
//! boxes are derived from Transform+Collider pairs on demand, overlap tests
//! are pairwise AABB checks with minimum-penetration vectors, and movement
//! resolves one axis at a time so entities slide along blocking edges.
//! There is no broad phase and no velocity integration.

pub mod collision;
pub mod collision_layers;
pub mod collision_system;

pub use collision::{Aabb, CollisionHit, CollisionKind};
pub use collision_layers::CollisionLayers;
pub use collision_system::CollisionSystem;
