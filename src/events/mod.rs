//! Event notification.
//!
//! The engine reports everything that happens as a `GameEvent` and pushes
//! it to an `EventSink` supplied by the caller. The same events are traced
//! at `debug` level.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink};
