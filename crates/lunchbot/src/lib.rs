//! # Lunchbot
//!
//! A chat bot that collects the office lunch order. People write `per me <dish>`, the bot
//! matches the text against the day's menu and keeps one shared order, which can be shown
//! (`ordine`) or exported as an e-mail (`email`).
//!
//! - [`model`]: the [`Order`](model::Order) ledger and its freshness rule.
//! - [`resolver`]: free text → menu lines.
//! - [`store`]: the persistence port (in-memory or Redis).
//! - [`order_actor`] / [`clients`]: the single writer that serializes order changes.
//! - [`commands`]: parsing chat messages and producing replies.
//! - [`channel`], [`http`], [`lifecycle`], [`config`]: the process around the core.

pub mod channel;
pub mod clients;
pub mod commands;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod resolver;
pub mod store;
