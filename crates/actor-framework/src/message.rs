//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Get**: read the current state of the resource (loaded, never saved).
/// - **Action**: load, apply a custom [`ActorEntity::Action`], then save.
///
/// This type is generic over `T: ActorEntity`, so an action meant for one resource cannot
/// be sent to an actor that owns another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
