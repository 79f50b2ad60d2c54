//! Platform-specific filesystem primitives.
//!
//! This module provides a unified interface over the platform calls
//! the liveness probe needs (`stat(2)` on Unix, file attribute queries
//! on Windows).
//!
//! The concrete implementation is selected at compile time
//! depending on the target operating system.

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(windows)]
pub(crate) mod windows;

#[cfg(unix)]
pub(crate) use unix as platform;

#[cfg(windows)]
pub(crate) use windows as platform;
