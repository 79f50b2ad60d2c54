//! # Observer: event sinks
//!
//! The [`Observer`] trait is where task [`Event`]s leave the scheduler.
//! Observers run inline, on the scheduler thread, in the order events
//! are emitted.
//!
//! Provided implementations:
//!   - [`Console`] → prints one line per event to stdout
//!   - [`Recorder`] → keeps events in memory, for tests and embedders
//!
//! ```text
//!   Task::step ── Context::emit(Event) ──► Observer::on_event(&Event)
//! ```

use crate::event::Event;

use tracing::debug;

/// Receives every event emitted while the scheduler runs.
pub trait Observer {
    /// Called once for every emitted [`Event`].
    fn on_event(&mut self, event: &Event);
}

/// Prints each event's console line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Observer for Console {
    fn on_event(&mut self, event: &Event) {
        debug!(task = ?event.task(), ?event, "event");
        println!("{event}");
    }
}

/// Records events in emission order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Console lines of the recorded events, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Position of the first event equal to `event`.
    pub fn position(&self, event: &Event) -> Option<usize> {
        self.events.iter().position(|e| e == event)
    }
}

impl Observer for Recorder {
    fn on_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
