//! Observable task events.
//!
//! Every externally visible completion action a task performs is an
//! [`Event`]. The [`Display`](fmt::Display) form of each event is the
//! exact console line the binary prints for it:
//!
//! ```text
//! begin waiting on /tmp/a.txt
//! A ready
//! begin waiting on /tmp/b.txt
//! B ready
//! begin waiting 3.4 seconds
//! timer ready
//! all tasks complete
//! ```

use crate::task::TaskId;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Which resource of a file pair an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The resource waited on first.
    A,
    /// The resource waited on once `A` is ready.
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => f.write_str("A"),
            Slot::B => f.write_str("B"),
        }
    }
}

/// An event emitted by a task or by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A file-pair task started waiting on `resource`.
    WaitStarted { task: TaskId, resource: PathBuf },

    /// The resource in `slot` became ready.
    ResourceReady { task: TaskId, slot: Slot },

    /// A timer task captured its start instant.
    TimerStarted { task: TaskId, duration: Duration },

    /// A timer task's duration elapsed.
    TimerFired { task: TaskId },

    /// Every registered task reached `Complete`.
    AllComplete,
}

impl Event {
    /// The task that emitted this event, if any.
    pub fn task(&self) -> Option<TaskId> {
        match self {
            Event::WaitStarted { task, .. }
            | Event::ResourceReady { task, .. }
            | Event::TimerStarted { task, .. }
            | Event::TimerFired { task } => Some(*task),
            Event::AllComplete => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::WaitStarted { resource, .. } => {
                write!(f, "begin waiting on {}", resource.display())
            }
            Event::ResourceReady { slot, .. } => write!(f, "{slot} ready"),
            Event::TimerStarted { duration, .. } => {
                write!(f, "begin waiting {:.1} seconds", duration.as_secs_f64())
            }
            Event::TimerFired { .. } => f.write_str("timer ready"),
            Event::AllComplete => f.write_str("all tasks complete"),
        }
    }
}
