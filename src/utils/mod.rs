//! The `utils` module provides shared utilities used across the `hookmirror`
//! application.
//!
//! This module centralizes reusable components, such as the crate error types
//! and logging initialization, to promote consistency and reduce duplication.

pub mod error;
pub mod logging;
