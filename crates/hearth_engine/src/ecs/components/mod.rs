//! Component definitions
//!
//! Pure data components, one file per kind. Factory constructors stamp the
//! owning entity id into the instance; the registry reads it back through
//! the [`Component`](super::Component) trait when the instance is attached.

pub mod animation;
pub mod collider;
pub mod farming;
pub mod interactable;
pub mod item;
pub mod npc;
pub mod player;
pub mod sprite;
pub mod transform;

pub use animation::{AnimationClip, AnimationComponent};
pub use collider::ColliderComponent;
pub use farming::FarmingComponent;
pub use interactable::InteractableComponent;
pub use item::{ItemComponent, Tool, ToolKind};
pub use npc::{NpcBehavior, NpcComponent};
pub use player::PlayerComponent;
pub use sprite::SpriteComponent;
pub use transform::TransformComponent;
