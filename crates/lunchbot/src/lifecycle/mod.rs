//! # System Lifecycle
//!
//! Starts the Order actor and the background activities around it.
//!
//! - [`LunchSystem`] spawns the Order actor with the persistence port injected as its
//!   context, hands out [`CommandRouter`](crate::commands::CommandRouter)s, and shuts the
//!   actor down by dropping its client and awaiting the task.
//! - [`Keepalive`] pings the bot's own HTTP endpoint inside the [`WakeWindow`].
//!
//! The keepalive, the HTTP server and the chat channel run as independent tasks. They share
//! nothing with the actor except its client and the persistence port.

pub mod keepalive;
pub mod lunch_system;

pub use keepalive::*;
pub use lunch_system::*;
