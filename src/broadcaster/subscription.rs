use tokio::sync::mpsc;

use crate::broadcaster::engine::{Command, Event};

pub type SubscriberId = String;

/// One viewer's end of the broadcast: its identity plus the receiving half
/// of its delivery channel.
///
/// Dropping a `Subscription` deregisters the viewer, so a transport that
/// goes away without an explicit unsubscribe (the usual case for a closed
/// browser tab) still leaves the loop with no dead channel to fan out to.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    events: mpsc::Receiver<Event>,
    commands: mpsc::UnboundedSender<Command>,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriberId,
        events: mpsc::Receiver<Event>,
        commands: mpsc::UnboundedSender<Command>,
    ) -> Self {
        Self {
            id,
            events,
            commands,
        }
    }

    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// Waits for the next event.
    ///
    /// Returns `None` once the subscription has ended: after an
    /// unsubscribe, once any buffered events are drained, or when the
    /// broadcaster shuts down.
    pub async fn recv(&mut self) -> Option<Event> {
        self.events.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Deregister {
            id: self.id.clone(),
        });
    }
}
