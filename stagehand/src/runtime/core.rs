use super::registry::Registry;
use crate::event::Event;
use crate::fs::{FsProbe, Probe};
use crate::observer::{Console, Observer};
use crate::runtime::context::Context;
use crate::task::{Task, TaskId};
use crate::time::{Clock, MonotonicClock};

use std::time::Duration;

use tracing::{info, trace};

/// Summary of a completed [`Scheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of passes performed.
    pub passes: u64,

    /// Clock time between the first pass and completion.
    pub elapsed: Duration,
}

/// The cooperative scheduler.
///
/// `Scheduler` is responsible for:
/// - owning the task registry,
/// - stepping every unfinished task once per pass, in registration order,
/// - waiting one tick between passes,
/// - stopping once every task is complete.
///
/// It owns its capabilities (probe, clock, observer) and lends them to
/// each task through a [`Context`]. Nothing is global, so independent
/// schedulers can coexist on one thread.
pub struct Scheduler<P = FsProbe, C = MonotonicClock, O = Console> {
    /// Registered tasks.
    registry: Registry,

    /// Delay between two passes.
    tick: Duration,

    /// Readiness checks for external resources.
    probe: P,

    /// Time source, also used to wait between passes.
    clock: C,

    /// Sink for task events.
    observer: O,
}

impl<P: Probe, C: Clock, O: Observer> Scheduler<P, C, O> {
    /// Creates a scheduler with an empty registry.
    ///
    /// Use [`SchedulerBuilder`](crate::SchedulerBuilder) to configure one.
    pub(crate) fn new(tick: Duration, probe: P, clock: C, observer: O) -> Self {
        Self {
            registry: Registry::new(),
            tick,
            probe,
            clock,
            observer,
        }
    }

    /// Registers a task and returns its id.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let id = scheduler.register(tasks::timer(Duration::from_secs(2)));
    /// ```
    pub fn register<T: Task + 'static>(&mut self, task: T) -> TaskId {
        self.registry.register(task)
    }

    /// The task registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns `true` iff every registered task is complete.
    pub fn all_done(&self) -> bool {
        self.registry.all_done()
    }

    /// Delay between two passes.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// The clock lent to tasks.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The observer receiving task events.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Performs a single pass.
    ///
    /// Every task that is not complete is stepped exactly once, in
    /// registration order. Returns the number of tasks stepped.
    pub fn run_pass(&mut self) -> usize {
        let Self {
            registry,
            probe,
            clock,
            observer,
            ..
        } = self;

        let mut stepped = 0;

        for (id, task) in registry.iter_mut() {
            if task.status().is_complete() {
                continue;
            }

            let mut cx = Context::new(id, &*probe, &*clock, &mut *observer);
            task.step(&mut cx);

            stepped += 1;
        }

        trace!(stepped, "pass finished");
        stepped
    }

    /// Runs passes until every task is complete.
    ///
    /// The clock waits one tick between passes. There is no overall
    /// timeout: a task that never becomes ready keeps the loop running.
    /// Emits [`Event::AllComplete`] before returning.
    pub fn run(&mut self) -> RunReport {
        let started = self.clock.now();
        let mut passes = 0;

        info!(
            tasks = self.registry.len(),
            tick = ?self.tick,
            "scheduler started"
        );

        while !self.registry.all_done() {
            self.run_pass();
            passes += 1;

            if self.registry.all_done() {
                break;
            }

            self.clock.sleep(self.tick);
        }

        let elapsed = self.clock.elapsed_since(started);

        self.observer.on_event(&Event::AllComplete);
        info!(passes, ?elapsed, "all tasks complete");

        RunReport { passes, elapsed }
    }
}
