//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a persisted resource (the daily lunch order, …)
//! must implement to be owned by a `ResourceActor`. It specifies associated types for the
//! storage key, actions, context and errors, and provides the hooks the actor drives on every
//! message: `load`, `handle_action` and `save`.
//!
//! # Architecture Note
//! The actor does not keep entities in memory between messages. Every request is a complete
//! **load → mutate → save** cycle against whatever backend the entity reaches through its
//! `Context`. Because one actor processes one message at a time, those cycles never
//! interleave: the actor *is* the single writer for the resources it owns.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::save`] defaults to doing nothing, which suits read-mostly entities.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any persisted resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` because loading and saving talk to a backend.
/// The `Context` type is injected into every hook at `run()` time, so the backend handle
/// is bound late, after the actor and its client have been created.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The key this entity is stored under (e.g. `"order"`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Enum representing resource-specific mutations (e.g. `Select`, `Clear`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity, shared by every hook, so clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    // --- Lifecycle Hooks (Async) ---

    /// Produce the current state of the entity.
    ///
    /// Implementations decide what "current" means: an entity that is missing, corrupt or
    /// stale in the backend is expected to come back as a fresh instance rather than an error.
    /// Errors are reserved for a backend that cannot be reached.
    async fn load(id: &Self::Id, ctx: &Self::Context) -> Result<Self, Self::Error>;

    /// Persist the entity after a successful action.
    async fn save(&self, _id: &Self::Id, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Sync) ---

    /// Apply a resource-specific action to the loaded entity.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
