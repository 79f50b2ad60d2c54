//! # Stagehand
//!
//! **Stagehand** is a single-threaded cooperative scheduler for long-lived
//! polling tasks. Each task waits on something external (a file becoming
//! non-empty, a duration elapsing) and makes incremental progress every
//! time it is polled, without threads, blocking calls or coroutines.
//!
//! A task is re-entered through an ordinary call on every pass and
//! continues where it last yielded, because its resume point is an
//! explicit stage stored next to its payload:
//!
//! - A **registry** owns tasks in registration order and answers whether
//!   everything is finished
//! - A **poll-resume protocol** ([`task::Resumable`]) re-enters a
//!   [`task::Machine`] at its recorded stage, one boundary check per poll
//! - A **scheduler loop** steps every unfinished task once per pass and
//!   sleeps a fixed tick in between
//! - **Capabilities** (a liveness [`fs::Probe`] and a monotonic
//!   [`time::Clock`]) are lent to a task only for the duration of a poll
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stagehand::{SchedulerBuilder, tasks};
//! use std::time::Duration;
//!
//! let mut scheduler = SchedulerBuilder::new().build();
//!
//! scheduler.register(tasks::file_pair("/tmp/a.txt", "/tmp/b.txt"));
//! scheduler.register(tasks::timer(Duration::from_secs(3)));
//!
//! scheduler.run();
//! ```
//!
//! ## Modules
//!
//! - [`task`] — Task status, the `Task` trait and the resume protocol
//! - [`tasks`] — Built-in file-pair and timer tasks
//! - [`fs`] — Filesystem liveness probing
//! - [`time`] — Monotonic and manual clocks
//! - [`observer`] — Event sinks

mod runtime;
mod sys;

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod observer;
pub mod tasks;
pub mod time;

pub use config::Config;
pub use error::{Error, Result};
pub use event::Event;
pub use runtime::builder::SchedulerBuilder;
pub use runtime::context::Context;
pub use runtime::core::{RunReport, Scheduler};
pub use runtime::registry::Registry;
pub use runtime::task;
