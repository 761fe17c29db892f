//! The `error` module defines the error types used within `hookmirror`.
//!
//! The broadcaster deliberately has a tiny error surface: deregistering an
//! unknown viewer is a silent no-op, and delivery problems are liveness
//! concerns handled inside the coordination loop, so the only error a caller
//! can observe is that the broadcaster has shut down.

use thiserror::Error;

/// Errors surfaced by the live broadcaster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BroadcastError {
    /// The coordination loop has shut down and no longer accepts operations.
    ///
    /// Fatal to the caller's current request, never to the process.
    #[error("broadcaster is closed")]
    Closed,
}
