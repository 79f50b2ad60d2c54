//! Core scheduler components.
//!
//! This module contains the building blocks of the cooperative loop:
//! the task protocol, the registry that owns tasks, the per-poll
//! context, and the scheduler that drives passes.
//!
//! It is responsible for:
//! - holding tasks and answering "is everything finished?",
//! - re-entering each task at its recorded resume point,
//! - lending capabilities to a task for exactly one poll,
//! - pacing passes with a fixed tick.

pub(crate) mod builder;
pub(crate) mod context;
pub(crate) mod core;
pub(crate) mod registry;

pub mod task;
