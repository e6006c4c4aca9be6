//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. Runtime adapters (the web server)
//! implement the sink to translate domain events into change-feed signals.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
