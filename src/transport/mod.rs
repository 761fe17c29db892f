//! The `transport` module is responsible for the HTTP surface of hookmirror.
//!
//! It assembles the router (dashboard routes first, the capture fallback
//! last), runs the server, and implements the SSE streaming endpoint that
//! adapts one broadcaster subscription to a long-lived event stream.

pub mod http;
pub mod sse;
