//! Filesystem liveness probing.
//!
//! This module provides the readiness capability consumed by tasks
//! that wait on external files.
//!
//! It exposes:
//! - the [`Probe`] trait, answering "is this resource ready?",
//! - [`FsProbe`], the production probe backed by the platform layer.
//!
//! Probes never block and never fail: any error reported by the
//! operating system is folded into "not ready yet".

mod probe;

pub use probe::{FsProbe, Probe};
