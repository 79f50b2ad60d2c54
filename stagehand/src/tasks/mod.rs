//! Built-in task kinds.
//!
//! Each kind is a [`Machine`](crate::task::Machine) with its own stage
//! enum, wrapped in a [`Resumable`] to become a schedulable task:
//!
//! - [`FilePair`]: waits for file `A`, then for file `B`, to become
//!   non-empty;
//! - [`Timer`]: waits until a fixed duration has elapsed since its
//!   first poll.

mod file_pair;
mod timer;

pub use file_pair::{FilePair, FilePairStage};
pub use timer::{Timer, TimerStage};

use crate::config::WaitRange;
use crate::task::Resumable;

use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;

/// A file-pair task waiting on `first`, then `second`.
pub fn file_pair(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Resumable<FilePair> {
    Resumable::new(FilePair::new(first, second))
}

/// A timer task that completes `duration` after its first poll.
pub fn timer(duration: Duration) -> Resumable<Timer> {
    Resumable::new(Timer::new(duration))
}

/// A timer task whose duration is drawn from `range`.
pub fn random_timer<R: Rng + ?Sized>(rng: &mut R, range: &WaitRange) -> Resumable<Timer> {
    Resumable::new(Timer::random(rng, range))
}
