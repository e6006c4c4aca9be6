//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via DomainEventSink, debounces them, and
//! publishes payload-free change signals on the EventBus for SSE
//! subscribers. Consumers react by re-fetching the authoritative data,
//! never by applying deltas.

mod queue_worker;
mod sink;

pub use sink::ServerDomainEventSink;
