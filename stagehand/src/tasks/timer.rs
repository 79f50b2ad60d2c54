use crate::config::WaitRange;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::runtime::context::Context;
use crate::task::{Machine, Stage, Transition};

use rand::Rng;
use std::time::{Duration, Instant};

/// Resume points of a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStage {
    /// Waiting for the duration to elapse.
    Counting,
}

impl Stage for TimerStage {
    fn ordinal(self) -> u32 {
        0
    }
}

/// Waits until `duration` has elapsed since the task's first poll.
///
/// Elapsed time is recomputed from the clock on every poll; nothing but
/// the start instant is kept between polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    /// Target wait, fixed at construction.
    duration: Duration,

    /// Captured on the first poll.
    start: Option<Instant>,
}

impl Timer {
    /// Creates a timer payload for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            start: None,
        }
    }

    /// Creates a timer payload from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `secs` is negative, NaN,
    /// or too large to represent.
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        Duration::try_from_secs_f64(secs)
            .map(Self::new)
            .map_err(|_| Error::InvalidDuration(secs))
    }

    /// Creates a timer payload with a duration drawn from `range`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, range: &WaitRange) -> Self {
        Self::new(range.sample(rng))
    }

    /// Target wait.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant of the first poll, once it happened.
    pub fn started_at(&self) -> Option<Instant> {
        self.start
    }
}

impl Machine for Timer {
    type Stage = TimerStage;

    const KIND: &'static str = "timer";
    const FIRST: TimerStage = TimerStage::Counting;

    fn start(&mut self, cx: &mut Context<'_>) {
        self.start = Some(cx.now());

        cx.emit(Event::TimerStarted {
            task: cx.id(),
            duration: self.duration,
        });
    }

    fn poll_stage(&mut self, stage: TimerStage, cx: &mut Context<'_>) -> Transition<TimerStage> {
        match stage {
            TimerStage::Counting => {
                let Some(start) = self.start else {
                    return Transition::Yield;
                };

                if cx.elapsed_since(start) < self.duration {
                    return Transition::Yield;
                }

                cx.emit(Event::TimerFired { task: cx.id() });

                Transition::Complete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FsProbe;
    use crate::observer::Recorder;
    use crate::task::{Resumable, Status, Task, TaskId};
    use crate::time::{Clock, ManualClock};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn step(task: &mut Resumable<Timer>, clock: &ManualClock, recorder: &mut Recorder) {
        let mut cx = Context::new(TaskId::new(0), &FsProbe, clock, recorder);
        task.step(&mut cx);
    }

    #[test]
    fn start_is_captured_on_first_poll() {
        let clock = ManualClock::new();
        let mut task = Resumable::new(Timer::new(Duration::from_secs(1)));
        let mut recorder = Recorder::new();

        clock.advance(Duration::from_secs(5));
        assert_eq!(task.machine().started_at(), None);

        step(&mut task, &clock, &mut recorder);

        assert_eq!(task.machine().started_at(), Some(clock.now()));
        assert_eq!(recorder.lines(), ["begin waiting 1.0 seconds"]);
    }

    #[test]
    fn fires_exactly_at_duration() {
        let clock = ManualClock::new();
        let mut task = Resumable::new(Timer::new(Duration::from_millis(500)));
        let mut recorder = Recorder::new();

        step(&mut task, &clock, &mut recorder);

        clock.advance(Duration::from_millis(499));
        step(&mut task, &clock, &mut recorder);
        assert_eq!(task.status(), Status::Active);

        clock.advance(Duration::from_millis(1));
        step(&mut task, &clock, &mut recorder);
        assert_eq!(task.status(), Status::Complete);

        clock.advance(Duration::from_secs(10));
        step(&mut task, &clock, &mut recorder);

        assert_eq!(
            recorder.lines(),
            ["begin waiting 0.5 seconds", "timer ready"]
        );
    }

    #[test]
    fn zero_duration_fires_on_first_poll() {
        let clock = ManualClock::new();
        let mut task = Resumable::new(Timer::new(Duration::ZERO));
        let mut recorder = Recorder::new();

        step(&mut task, &clock, &mut recorder);

        assert_eq!(task.status(), Status::Complete);
        assert_eq!(
            recorder.lines(),
            ["begin waiting 0.0 seconds", "timer ready"]
        );
    }

    #[test]
    fn invalid_seconds_are_rejected() {
        assert_eq!(
            Timer::from_secs_f64(-1.0),
            Err(Error::InvalidDuration(-1.0))
        );
        assert!(Timer::from_secs_f64(f64::NAN).is_err());
        assert_eq!(
            Timer::from_secs_f64(0.5).map(|t| t.duration()),
            Ok(Duration::from_millis(500))
        );
    }

    #[test]
    fn random_duration_comes_from_range() {
        let range = WaitRange::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let timer = Timer::random(&mut rng, &range);

            assert!(timer.duration() >= range.min());
            assert!(timer.duration() <= range.max());
            assert_eq!(timer.started_at(), None);
        }
    }
}
