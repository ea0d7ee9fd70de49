//! Ordered delivery of player messages off the input path.
use std::sync::Arc;

use client_transport_core::Transport;
use game_protocol::{GameInfo, Message};
use tokio::sync::{mpsc, oneshot};

enum Outgoing {
    Send(Message),
    Flush(oneshot::Sender<()>),
}

/// Queue in front of [`Transport::update`].
///
/// One task drains the queue, so messages reach the transport in the order
/// they were queued and a slow send never holds up the caller. The task exits
/// once every handle is dropped.
#[derive(Clone, Debug)]
pub struct Outbox {
    tx: mpsc::UnboundedSender<Outgoing>,
}

impl Outbox {
    pub fn spawn(transport: Arc<dyn Transport>, info: GameInfo) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(deliver(transport, info, rx));
        Self { tx }
    }

    /// Queues `message` for sending. Returns false if the delivery task is gone.
    pub fn queue(&self, message: Message) -> bool {
        let name = message.name();
        if self.tx.send(Outgoing::Send(message)).is_err() {
            tracing::warn!(message = name, "Outbox closed, message dropped");
            return false;
        }
        true
    }

    /// Resolves once everything queued before the call has been handed to the
    /// transport, successfully or not.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.tx.send(Outgoing::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn deliver(
    transport: Arc<dyn Transport>,
    info: GameInfo,
    mut rx: mpsc::UnboundedReceiver<Outgoing>,
) {
    let mut failures = 0u64;

    while let Some(outgoing) = rx.recv().await {
        match outgoing {
            Outgoing::Send(message) => {
                tracing::debug!(tag = message.tag(), "Sending {}", message.name());
                if let Err(error) = transport.update(&message, &info).await {
                    failures += 1;
                    tracing::warn!(%error, message = message.name(), "Failed to send message");
                }
            }
            Outgoing::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    tracing::debug!(failures, "Outbox closed");
}
