//! Broadcaster engine
//!
//! This module contains the coordination loop and its cloneable handle,
//! responsible for:
//! - tracking the set of live viewers and their delivery channels
//! - fanning each published event out to every registered viewer
//! - answering subscriber-count queries in loop order
//!
//! Concurrency and usage notes:
//! - The loop is the sole owner of the subscriber set. Every operation is a
//!   message into its queue and is processed one at a time, in arrival
//!   order; producers and transports never touch the set directly.
//! - Delivery is an awaited send onto each viewer's bounded channel. A
//!   viewer that stops reading with a full buffer stalls the loop, and with
//!   it delivery to every other viewer, until it reads or goes away
//!   (head-of-line blocking). A viewer whose receiver is gone fails the
//!   send immediately and is removed on the spot, so a dead connection can
//!   never stall the loop indefinitely.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use uuid::Uuid;

use crate::broadcaster::subscription::{SubscriberId, Subscription};
use crate::utils::error::BroadcastError;

/// One immutable captured-request record, shared by reference during fan-out.
pub type Event = Arc<str>;

/// Messages understood by the coordination loop.
pub(crate) enum Command {
    Register {
        id: SubscriberId,
        channel: mpsc::Sender<Event>,
    },
    Deregister {
        id: SubscriberId,
    },
    Deliver {
        event: Event,
    },
    Count {
        reply: oneshot::Sender<usize>,
    },
    Shutdown,
}

/// Cloneable handle to the coordination loop.
///
/// `subscribe`, `unsubscribe`, and `publish` are message sends into the
/// loop and return once the command is accepted, not once it is processed;
/// the queue's FIFO order is what makes the subscriber set race-free.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    commands: mpsc::UnboundedSender<Command>,
    delivery_buffer: usize,
}

impl Broadcaster {
    /// Spawns the coordination loop and returns a handle to it.
    ///
    /// `delivery_buffer` is the per-viewer channel capacity; a value of
    /// zero is treated as one.
    pub fn start(delivery_buffer: usize) -> Self {
        let (commands, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_loop(queue));
        Self {
            commands,
            delivery_buffer: delivery_buffer.max(1),
        }
    }

    /// Registers a new viewer and returns its subscription handle.
    ///
    /// Events published after this call returns are guaranteed to reach the
    /// new viewer, because the registration command is queued ahead of them.
    pub fn subscribe(&self) -> Result<Subscription, BroadcastError> {
        let id: SubscriberId = format!("viewer-{}", Uuid::new_v4());
        let (channel, events) = mpsc::channel(self.delivery_buffer);

        self.commands
            .send(Command::Register {
                id: id.clone(),
                channel,
            })
            .map_err(|_| BroadcastError::Closed)?;

        Ok(Subscription::new(id, events, self.commands.clone()))
    }

    /// Requests removal of a viewer.
    ///
    /// Idempotent: removing an unknown or already-removed viewer is a
    /// no-op. Once processed, the viewer's delivery channel is released and
    /// any pending read on it observes end-of-stream.
    pub fn unsubscribe(&self, id: &SubscriberId) {
        let _ = self.commands.send(Command::Deregister { id: id.clone() });
    }

    /// Hands one event to the loop for delivery to the current viewer set.
    ///
    /// Returns once the loop has accepted the event, not once every viewer
    /// has received it.
    pub fn publish(&self, event: Event) -> Result<(), BroadcastError> {
        self.commands
            .send(Command::Deliver { event })
            .map_err(|_| BroadcastError::Closed)
    }

    /// Number of registered viewers, as of the commands processed so far.
    pub async fn subscriber_count(&self) -> Result<usize, BroadcastError> {
        let (reply, count) = oneshot::channel();
        self.commands
            .send(Command::Count { reply })
            .map_err(|_| BroadcastError::Closed)?;
        count.await.map_err(|_| BroadcastError::Closed)
    }

    /// Stops the coordination loop.
    ///
    /// Every viewer's delivery channel is released, so live streams end,
    /// and subsequent operations report [`BroadcastError::Closed`].
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }
}

/// The coordination loop: the sole mutator of the subscriber set.
async fn run_loop(mut queue: mpsc::UnboundedReceiver<Command>) {
    let mut subscribers: HashMap<SubscriberId, mpsc::Sender<Event>> = HashMap::new();

    while let Some(command) = queue.recv().await {
        match command {
            Command::Register { id, channel } => {
                subscribers.insert(id, channel);
                info!(subscribers = subscribers.len(), "viewer registered");
            }
            Command::Deregister { id } => {
                if subscribers.remove(&id).is_some() {
                    info!(subscribers = subscribers.len(), "viewer removed");
                }
            }
            Command::Deliver { event } => {
                let mut dead = Vec::new();
                for (id, channel) in &subscribers {
                    // Waits while this viewer's buffer is full; fails
                    // immediately once its receiver is gone.
                    if channel.send(event.clone()).await.is_err() {
                        dead.push(id.clone());
                    }
                }
                for id in dead {
                    subscribers.remove(&id);
                    debug!(
                        subscribers = subscribers.len(),
                        "removed disconnected viewer during delivery"
                    );
                }
            }
            Command::Count { reply } => {
                let _ = reply.send(subscribers.len());
            }
            Command::Shutdown => {
                // Refuse further commands before releasing the viewer
                // channels, so callers that observe an ended stream also
                // observe a closed broadcaster.
                queue.close();
                break;
            }
        }
    }
    // Dropping the subscriber map releases every delivery channel; pending
    // readers observe end-of-stream.
}
