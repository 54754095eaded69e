//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer for a family of persisted
//! entities. It implements the "Server" side of the Actor Model: messages are processed one
//! at a time, so two read-modify-write cycles on the same resource can never interleave.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that serializes access to persisted entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the receiver end of the channel;
/// the entity state itself lives in whatever backend the entity's `Context` points at.
///
/// **Concurrency Model**:
/// Handlers running on many tasks share cloned `ResourceClient`s, but every request lands in
/// the same queue and is handled to completion before the next one is read. A request that
/// loads, mutates and saves an entity therefore behaves as a transaction with respect to every
/// other request sent through this actor, without any `Mutex` around the backend.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (the storage handle) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)] struct Counter { hits: u32 }
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = String;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn load(_: &String, _: &()) -> Result<Self, Self::Error> { Ok(Self::default()) }
///     fn handle_action(&mut self, _: CounterAction) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///     let hits = client.perform_action("c".into(), CounterAction::Hit).await.unwrap();
///     assert_eq!(hits, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Get**: calls [`ActorEntity::load`] and returns the entity. Nothing is written back.
/// * **Action**:
///     1. Calls [`ActorEntity::load`].
///     2. Calls [`ActorEntity::handle_action`] on the loaded entity.
///     3. Calls [`ActorEntity::save`] if the action succeeded.
///     4. Returns the action result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "lunchbot::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    debug!(entity_type, %id, "Get");
                    let result = T::load(&id, &context).await.map_err(|e| {
                        warn!(entity_type, %id, error = %e, "Load failed");
                        FrameworkError::EntityError(Box::new(e))
                    });
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = Self::apply(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, handled, "Shutdown");
    }

    async fn apply(
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut item = T::load(id, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        let result = item
            .handle_action(action)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.save(id, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        Ok(result)
    }
}
