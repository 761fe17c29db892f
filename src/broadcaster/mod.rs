//! The `broadcaster` module is the live heart of hookmirror: a single
//! in-process publish/subscribe hub that takes each captured request from
//! the capture endpoint and fans it out to every connected dashboard viewer.
//!
//! All shared state lives inside one coordination task; registration,
//! deregistration, and delivery are serialized through its command queue,
//! so no caller ever needs a lock.

pub mod engine;
pub mod subscription;

pub use engine::{Broadcaster, Event};
pub use subscription::{SubscriberId, Subscription};
