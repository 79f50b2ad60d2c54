//! Monotonic time sources.
//!
//! This module provides the clock capability consumed by timer tasks
//! and by the scheduler loop between passes.
//!
//! It includes:
//! - [`Clock`], the capability trait,
//! - [`MonotonicClock`], backed by [`std::time::Instant`],
//! - [`ManualClock`], a deterministic clock that only moves when told to.

mod clock;

#[doc(inline)]
pub use clock::{Clock, ManualClock, MonotonicClock};
