//! Resumable task primitives.
//!
//! This module defines the abstractions the scheduler uses to represent
//! and advance tasks without a preserved call stack.
//!
//! It includes:
//! - task status management,
//! - the object-safe [`Task`] trait the scheduler dispatches on,
//! - the [`Machine`] / [`Resumable`] pair implementing the poll-resume
//!   protocol over an explicit stage enum.
//!
//! A task is re-entered through an ordinary call on every poll. Where it
//! continues is decided by the stage stored next to its payload, never by
//! anything left on the stack.

mod core;
mod machine;
mod state;

pub use self::core::{Task, TaskId};
pub use machine::{Machine, Resumable, Stage, Transition};
pub use state::Status;
