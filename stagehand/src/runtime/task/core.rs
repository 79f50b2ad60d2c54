use super::Status;
use crate::runtime::context::Context;

use std::fmt;

/// Identifier of a task inside one registry.
///
/// Ids are registration ordinals: the first task registered is `#0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(usize);

impl TaskId {
    /// Creates an id from a registration ordinal.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the registration ordinal.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of work the scheduler can poll.
///
/// The `Task` trait is the only thing the scheduler knows about a task:
/// it can be stepped once, and it reports where it is in its lifecycle.
/// The registry stores tasks as `Box<dyn Task>`, so new kinds plug in
/// without touching the scheduler.
///
/// Most tasks do not implement this trait by hand; they implement
/// [`Machine`](super::Machine) and are wrapped in a
/// [`Resumable`](super::Resumable), which enforces the resume protocol.
pub trait Task {
    /// Short, static name of the task kind, used in logs.
    fn kind(&self) -> &'static str;

    /// Current lifecycle status.
    fn status(&self) -> Status;

    /// Ordinal of the stage the next poll resumes at.
    ///
    /// `None` until the first poll. Never decreases afterwards.
    fn resume_point(&self) -> Option<u32>;

    /// Advances the task by one poll.
    ///
    /// Must not block. Must be a no-op once the task is complete.
    fn step(&mut self, cx: &mut Context<'_>);
}
