//! Server event bus feeding the SSE change feed.
//!
//! Events carry a name and an optional JSON payload. Change-feed signals
//! intentionally carry no payload: subscribers must re-query and recompute
//! rather than trust anything delivered over the feed.

use serde_json::Value;
use tokio::sync::broadcast;

/// The goals collection changed for some user(s); re-fetch and recompute.
pub const GOALS_CHANGED: &str = "goals-changed";
/// The set of registered profiles changed.
pub const PROFILES_CHANGED: &str = "profiles-changed";

/// An event delivered to SSE subscribers.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }
}

/// Broadcast bus with bounded, lossy delivery.
///
/// A lagged subscriber loses signals, which is harmless here: the next
/// signal still triggers a full re-fetch.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: ServerEvent) {
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }
}
