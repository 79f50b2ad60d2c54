use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Readings never move backwards and are unaffected by wall-clock
/// adjustments. The scheduler also uses the clock to wait between
/// passes, so a clock decides what "sleeping" means.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Blocks the scheduler for `duration`.
    fn sleep(&self, duration: Duration);

    /// Returns the time elapsed since `start`, saturating at zero.
    fn elapsed_since(&self, start: Instant) -> Duration {
        self.now().saturating_duration_since(start)
    }
}

/// The system monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Creates a new monotonic clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// A clock that advances only when asked to.
///
/// `sleep` advances the clock instead of blocking, which lets a whole
/// scheduler run complete instantly and deterministically.
///
/// # Examples
///
/// ```rust,ignore
/// let clock = ManualClock::new();
/// let t0 = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.elapsed_since(t0), Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    /// Instant captured at construction.
    origin: Instant,

    /// Total time the clock has been advanced by.
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Returns how far the clock has been advanced since construction.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
