//! Event sinks: where the engine sends its event stream.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receiver of game events.
///
/// Called synchronously, once per event, in emission order.
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Records events for later inspection.
///
/// Clones share the same buffer: hand one clone to the game and keep
/// another to read the history.
///
/// ```
/// use trade_board::events::{EventLog, EventSink, GameEvent};
///
/// let log = EventLog::new();
/// let mut sink = log.clone();
/// sink.notify(&GameEvent::NoWinner);
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Rendered text of every event recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
