//! The `capture` module turns arbitrary inbound HTTP requests into
//! captured-request records.
//!
//! It defines the record that is stored in history and mirrored to viewers,
//! and the catch-all handler that produces one for every request hitting an
//! unregistered route.

pub mod handler;
pub mod record;

pub use record::CapturedRequest;

#[cfg(test)]
mod tests;
