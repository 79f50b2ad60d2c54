use crate::event::Event;
use crate::fs::Probe;
use crate::observer::Observer;
use crate::task::TaskId;
use crate::time::Clock;

use std::path::Path;
use std::time::{Duration, Instant};

/// Capabilities handed to a task for the duration of one poll.
///
/// A `Context` is built by the scheduler right before a task is
/// stepped and dropped right after. It gives the task read-only access
/// to the probe and the clock, and a way to emit events. Nothing in it
/// outlives the poll, so a task cannot stash capability state between
/// calls.
pub struct Context<'a> {
    /// Task being polled.
    id: TaskId,

    /// Readiness checks for external resources.
    probe: &'a dyn Probe,

    /// Monotonic time source.
    clock: &'a dyn Clock,

    /// Sink for emitted events.
    observer: &'a mut dyn Observer,
}

impl<'a> Context<'a> {
    /// Creates a context for polling task `id`.
    ///
    /// The scheduler does this on every step; building one by hand is
    /// only useful to drive a task directly, e.g. in tests.
    pub fn new(
        id: TaskId,
        probe: &'a dyn Probe,
        clock: &'a dyn Clock,
        observer: &'a mut dyn Observer,
    ) -> Self {
        Self {
            id,
            probe,
            clock,
            observer,
        }
    }

    /// Id of the task being polled.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Asks the probe whether `resource` is ready.
    pub fn is_ready(&self, resource: &Path) -> bool {
        self.probe.is_ready(resource)
    }

    /// Current reading of the monotonic clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Time elapsed since `start`, computed fresh on every call.
    pub fn elapsed_since(&self, start: Instant) -> Duration {
        self.clock.elapsed_since(start)
    }

    /// Delivers `event` to the observer.
    pub fn emit(&mut self, event: Event) {
        self.observer.on_event(&event);
    }
}
