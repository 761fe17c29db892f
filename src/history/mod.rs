//! The `history` module owns the in-memory record of captured requests.
//!
//! The store is independent of the broadcaster: captures land here whether
//! or not any viewer is connected, and a stalled live stream never loses an
//! already-captured request.

pub mod store;

pub use store::HistoryStore;
