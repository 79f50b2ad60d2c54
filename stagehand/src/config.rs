//! Process configuration.
//!
//! The binary takes no flags and reads no environment variables, so
//! every setting here is a compiled-in default that embedders can
//! override field by field.

use crate::error::{Error, Result};

use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between two scheduler passes.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// A discrete, uniformly sampled range of wait durations.
///
/// Samples are `base + step * k` with `k` drawn uniformly from
/// `0..steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRange {
    base: Duration,
    step: Duration,
    steps: u32,
}

impl WaitRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRange`] if `steps == 0`, and
    /// [`Error::RangeOverflow`] if `base + step * (steps - 1)` is not
    /// representable.
    pub fn new(base: Duration, step: Duration, steps: u32) -> Result<Self> {
        if steps == 0 {
            return Err(Error::EmptyRange);
        }

        step.checked_mul(steps - 1)
            .and_then(|span| base.checked_add(span))
            .ok_or(Error::RangeOverflow)?;

        Ok(Self { base, step, steps })
    }

    /// Smallest duration this range can produce.
    pub fn min(&self) -> Duration {
        self.base
    }

    /// Largest duration this range can produce.
    pub fn max(&self) -> Duration {
        self.base + self.step * (self.steps - 1)
    }

    /// Draws one duration from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        self.base + self.step * rng.random_range(0..self.steps)
    }
}

impl Default for WaitRange {
    /// 2.0 to 5.9 seconds in tenths of a second.
    fn default() -> Self {
        Self {
            base: Duration::from_secs(2),
            step: Duration::from_millis(100),
            steps: 40,
        }
    }
}

/// Settings for the demo scheduler run by the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between scheduler passes.
    pub tick: Duration,

    /// First file the file-pair task waits on.
    pub first: PathBuf,

    /// Second file, waited on once the first is ready.
    pub second: PathBuf,

    /// Distribution the timer task draws its duration from.
    pub wait: WaitRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            first: default_resource("a.txt"),
            second: default_resource("b.txt"),
            wait: WaitRange::default(),
        }
    }
}

/// `/tmp/<name>` on Unix; the system temporary directory elsewhere.
fn default_resource(name: &str) -> PathBuf {
    if cfg!(unix) {
        PathBuf::from("/tmp").join(name)
    } else {
        std::env::temp_dir().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_range_matches_tenths_between_two_and_six() {
        let range = WaitRange::default();

        assert_eq!(range.min(), Duration::from_secs(2));
        assert_eq!(range.max(), Duration::from_millis(5900));
    }

    #[test]
    fn samples_stay_on_the_grid() {
        let range = WaitRange::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let d = range.sample(&mut rng);

            assert!(d >= range.min() && d <= range.max());
            assert_eq!(d.as_millis() % 100, 0);
        }
    }

    #[test]
    fn single_step_range_is_constant() {
        let range = WaitRange::new(Duration::from_millis(500), Duration::from_secs(9), 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(range.sample(&mut rng), Duration::from_millis(500));
        assert_eq!(range.max(), Duration::from_millis(500));
    }

    #[test]
    fn empty_range_is_rejected() {
        assert_eq!(
            WaitRange::new(Duration::ZERO, Duration::from_millis(1), 0),
            Err(Error::EmptyRange)
        );
    }

    #[test]
    fn overflowing_range_is_rejected() {
        assert_eq!(
            WaitRange::new(Duration::MAX, Duration::from_secs(1), 2),
            Err(Error::RangeOverflow)
        );
        assert_eq!(
            WaitRange::new(Duration::ZERO, Duration::MAX, 3),
            Err(Error::RangeOverflow)
        );

        let widest = WaitRange::new(Duration::MAX, Duration::from_secs(1), 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(widest.max(), Duration::MAX);
        assert_eq!(widest.sample(&mut rng), Duration::MAX);
    }

    #[test]
    fn default_config_polls_every_hundred_millis() {
        let config = Config::default();

        assert_eq!(config.tick, DEFAULT_TICK);
        assert!(config.first.ends_with("a.txt"));
        assert!(config.second.ends_with("b.txt"));
    }
}
