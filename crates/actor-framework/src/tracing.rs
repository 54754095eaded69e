//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every actor in the process.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); actors identify
//! themselves through the `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full action payloads
//! ```
//!
//! With `RUST_LOG=debug` a dish selection reads:
//!
//! ```text
//! DEBUG select_dish: Selecting dish user="anna" dish="riso"
//! DEBUG Action entity_type="Order" id=order action=Select { user: "anna", dish: "riso" }
//! INFO  Action ok entity_type="Order" id=order
//! ```

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Calling it twice panics, so binaries call it once at startup and tests never call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
