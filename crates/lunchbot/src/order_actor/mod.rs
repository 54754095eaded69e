//! # Order Actor
//!
//! Owns the daily lunch order. Every request goes through one [`ResourceActor`], so
//! selections from different users are applied one after the other and none is lost to a
//! concurrent read-modify-write.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use lunchbot::clients::OrderClient;
//! use lunchbot::order_actor;
//! use lunchbot::store::Persistence;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new();
//!     let client = OrderClient::new(generic_client);
//!
//!     // The persistence port is the actor's context
//!     tokio::spawn(actor.run(Persistence::in_memory()));
//!
//!     client.select_dish("anna", "riso").await?;
//!     let order = client.current_order().await?;
//!     assert_eq!(order.dishes["riso"], vec!["anna"]);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
