use super::core::Scheduler;
use crate::config::DEFAULT_TICK;
use crate::error::{Error, Result};
use crate::fs::{FsProbe, Probe};
use crate::observer::{Console, Observer};
use crate::time::{Clock, MonotonicClock};

use std::time::Duration;

/// Builder for configuring and creating a scheduler.
///
/// `SchedulerBuilder` allows customizing the scheduler before it is
/// constructed: the tick between passes and the three capabilities
/// lent to tasks. Swapping a capability changes the builder's type.
///
/// # Examples
///
/// ```rust,ignore
/// let scheduler = SchedulerBuilder::new()
///     .tick(Duration::from_millis(50))
///     .clock(ManualClock::new())
///     .observer(Recorder::new())
///     .build();
/// ```
pub struct SchedulerBuilder<P = FsProbe, C = MonotonicClock, O = Console> {
    /// Delay between two passes.
    tick: Duration,

    probe: P,
    clock: C,
    observer: O,
}

impl SchedulerBuilder {
    /// Creates a new `SchedulerBuilder` with default configuration.
    ///
    /// By default the scheduler ticks every 100ms, probes the real
    /// filesystem, reads the system monotonic clock and prints events
    /// to stdout.
    pub fn new() -> Self {
        Self {
            tick: DEFAULT_TICK,
            probe: FsProbe::new(),
            clock: MonotonicClock::new(),
            observer: Console,
        }
    }
}

impl<P, C, O> SchedulerBuilder<P, C, O> {
    /// Sets the delay between two passes.
    ///
    /// # Panics
    ///
    /// Panics if `tick` is zero.
    pub fn tick(mut self, tick: Duration) -> Self {
        assert!(!tick.is_zero(), "tick must be > 0");

        self.tick = tick;
        self
    }

    /// Sets the delay between two passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTick`] if `tick` is zero.
    pub fn try_tick(mut self, tick: Duration) -> Result<Self> {
        if tick.is_zero() {
            return Err(Error::ZeroTick);
        }

        self.tick = tick;
        Ok(self)
    }

    /// Replaces the readiness probe.
    pub fn probe<Q: Probe>(self, probe: Q) -> SchedulerBuilder<Q, C, O> {
        SchedulerBuilder {
            tick: self.tick,
            probe,
            clock: self.clock,
            observer: self.observer,
        }
    }

    /// Replaces the clock.
    pub fn clock<K: Clock>(self, clock: K) -> SchedulerBuilder<P, K, O> {
        SchedulerBuilder {
            tick: self.tick,
            probe: self.probe,
            clock,
            observer: self.observer,
        }
    }

    /// Replaces the event observer.
    pub fn observer<W: Observer>(self, observer: W) -> SchedulerBuilder<P, C, W> {
        SchedulerBuilder {
            tick: self.tick,
            probe: self.probe,
            clock: self.clock,
            observer,
        }
    }
}

impl<P: Probe, C: Clock, O: Observer> SchedulerBuilder<P, C, O> {
    /// Builds the scheduler with the configured options.
    ///
    /// The registry starts empty.
    pub fn build(self) -> Scheduler<P, C, O> {
        Scheduler::new(self.tick, self.probe, self.clock, self.observer)
    }
}

impl Default for SchedulerBuilder {
    /// Creates a default `SchedulerBuilder`.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hundred_millis() {
        let scheduler = SchedulerBuilder::new().build();

        assert_eq!(scheduler.tick(), Duration::from_millis(100));
        assert!(scheduler.registry().is_empty());
    }

    #[test]
    fn try_tick_rejects_zero() {
        assert_eq!(
            SchedulerBuilder::new().try_tick(Duration::ZERO).err(),
            Some(Error::ZeroTick)
        );

        let scheduler = SchedulerBuilder::new()
            .try_tick(Duration::from_millis(5))
            .unwrap()
            .build();
        assert_eq!(scheduler.tick(), Duration::from_millis(5));
    }

    #[test]
    #[should_panic(expected = "tick must be > 0")]
    fn zero_tick_panics() {
        let _ = SchedulerBuilder::new().tick(Duration::ZERO);
    }
}
