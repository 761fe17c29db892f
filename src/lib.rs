//! # hookmirror
//!
//! `hookmirror` is a catch-all webhook receiver with a live dashboard. Every
//! inbound request on an unrecognized route is captured as an immutable
//! record, appended to an in-memory history, echoed back to the sender, and
//! mirrored in real time to every connected viewer over server-sent events.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `broadcaster`: The live publish/subscribe hub that fans each captured request out to all connected viewers.
//! - `capture`: The captured-request record and the catch-all handler that produces it.
//! - `config`: Handles loading and managing server configuration.
//! - `history`: The bounded in-memory store of captured requests.
//! - `transport`: The HTTP server, route registration, and the SSE streaming endpoint.
//! - `utils`: Contains shared utilities, such as error handling and logging.

pub mod broadcaster;
pub mod capture;
pub mod config;
pub mod history;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;
