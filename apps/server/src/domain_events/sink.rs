//! Domain event sink implementation for the web server.

use std::sync::Mutex;

use tokio::sync::mpsc;

use stakeboard_core::events::{DomainEvent, DomainEventSink};

use crate::events::EventBus;

use super::queue_worker::event_queue_worker;

/// Sink that forwards domain events into the queue worker.
///
/// Created before the worker starts; events emitted in the interim are
/// buffered in the channel and drained once `start_worker` runs.
pub struct ServerDomainEventSink {
    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<DomainEvent>>>,
}

impl ServerDomainEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Spawns the debouncing worker. Call once, after the EventBus exists.
    pub fn start_worker(&self, event_bus: EventBus) {
        let rx = self
            .rx
            .lock()
            .unwrap()
            .take()
            .expect("worker already started");
        tokio::spawn(event_queue_worker(rx, event_bus));
    }
}

impl Default for ServerDomainEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEventSink for ServerDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Domain event dropped: queue worker is gone");
        }
    }
}
