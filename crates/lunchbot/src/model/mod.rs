//! Pure data structures; [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod order;

pub use order::*;
