//! Event queue worker translating domain events into change-feed signals.
//!
//! Receives events from an mpsc channel, debounces them with a short
//! window, then publishes one signal per affected collection. The signals
//! carry no payload: SSE consumers must re-query storage.

use std::time::Duration;

use tokio::sync::mpsc;

use stakeboard_core::events::DomainEvent;

use crate::events::{EventBus, ServerEvent, GOALS_CHANGED, PROFILES_CHANGED};

/// Debounce window for collecting events before signaling.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(250);

/// Runs the event queue worker until the sink side is dropped.
pub async fn event_queue_worker(mut rx: mpsc::UnboundedReceiver<DomainEvent>, event_bus: EventBus) {
    tracing::info!("Domain event queue worker started");

    let mut pending_events: Vec<DomainEvent> = Vec::new();

    loop {
        if !pending_events.is_empty() {
            tokio::select! {
                event = rx.recv() => {
                    match event {
                        Some(e) => pending_events.push(e),
                        None => {
                            publish_batch(&pending_events, &event_bus);
                            tracing::info!("Domain event queue worker shutting down");
                            return;
                        }
                    }
                }
                _ = tokio::time::sleep(DEBOUNCE_DURATION) => {
                    let batch = std::mem::take(&mut pending_events);
                    publish_batch(&batch, &event_bus);
                }
            }
        } else {
            match rx.recv().await {
                Some(e) => pending_events.push(e),
                None => {
                    tracing::info!("Domain event queue worker shutting down");
                    return;
                }
            }
        }
    }
}

/// Publishes at most one signal per collection for a batch of events.
fn publish_batch(events: &[DomainEvent], event_bus: &EventBus) {
    let mut goals_changed = false;
    let mut profiles_changed = false;

    for event in events {
        match event {
            DomainEvent::GoalsChanged { .. } => goals_changed = true,
            DomainEvent::ProfilesChanged { .. } => profiles_changed = true,
        }
    }

    if goals_changed {
        event_bus.publish(ServerEvent::new(GOALS_CHANGED));
    }
    if profiles_changed {
        event_bus.publish(ServerEvent::new(PROFILES_CHANGED));
    }
}
