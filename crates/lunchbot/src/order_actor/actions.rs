//! Custom actions for the Order actor.
//!
//! These are the only ways the daily [`Order`](crate::model::Order) changes. Each one runs
//! inside a single actor turn: load, apply, save.

/// Mutations of the daily order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Make `dish` (a literal, already-resolved menu line) the selection of `user`.
    Select { user: String, dish: String },
    /// Drop whatever `user` had selected.
    Clear { user: String },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The dish now recorded for the user.
    Select(String),
    /// The dishes the user had before, comma-joined; empty if none.
    Clear(String),
}
