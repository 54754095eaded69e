//! # Actor Framework
//!
//! Building blocks for serializing access to persisted resources with Tokio actors.
//!
//! ## Why an actor in front of storage?
//!
//! A chat bot handles every incoming message on its own task. When two of those handlers
//! read a shared record, change it and write it back, the later write silently drops the
//! earlier one. Routing every read-modify-write through one actor removes the race:
//!
//! - Each resource family gets a [`ResourceActor`] running in its own task
//! - Requests queue on a bounded channel and run **one at a time**
//! - Each request is a full **load → mutate → save** cycle, never interleaved with another
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - how a resource is loaded, mutated and saved
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and serialization
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Context Injection Pattern
//!
//! The storage handle is not passed to [`ResourceActor::new`] but to [`ResourceActor::run`].
//! The actor and its client can therefore be created before the backend connection exists,
//! and tests can run the same entity against an in-memory backend.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//! use std::sync::{Arc, Mutex};
//!
//! type Backend = Arc<Mutex<HashMap<String, u32>>>;
//!
//! #[derive(Clone, Debug)] struct Counter { value: u32 }
//! #[derive(Debug)] enum CounterAction { Add(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = String; type Action = CounterAction; type ActionResult = u32;
//!     type Context = Backend; type Error = CounterError;
//!
//!     async fn load(id: &String, ctx: &Backend) -> Result<Self, Self::Error> {
//!         let value = ctx.lock().unwrap().get(id).copied().unwrap_or(0);
//!         Ok(Self { value })
//!     }
//!     async fn save(&self, id: &String, ctx: &Backend) -> Result<(), Self::Error> {
//!         ctx.lock().unwrap().insert(id.clone(), self.value);
//!         Ok(())
//!     }
//!     fn handle_action(&mut self, action: CounterAction) -> Result<u32, Self::Error> {
//!         match action { CounterAction::Add(n) => self.value += n }
//!         Ok(self.value)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend: Backend = Arc::default();
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(backend.clone()));
//!
//!     client.perform_action("hits".into(), CounterAction::Add(2)).await.unwrap();
//!     let total = client.perform_action("hits".into(), CounterAction::Add(3)).await.unwrap();
//!     assert_eq!(total, 5);
//!     assert_eq!(backend.lock().unwrap()["hits"], 5);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from a queue of expectations, so
//! the code that *uses* a client can be tested without any actor or backend.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
