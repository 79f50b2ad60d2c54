use super::{Status, Task};
use crate::runtime::context::Context;

use std::fmt;

use tracing::{debug, warn};

/// A named resume point of a [`Machine`].
///
/// Stages are totally ordered by their ordinal; a machine may only move
/// to a stage with a strictly greater ordinal.
pub trait Stage: Copy + Eq + fmt::Debug {
    /// Position of this stage in the machine's sequence.
    fn ordinal(self) -> u32;
}

/// Outcome of evaluating one stage's boundary condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    /// Condition not met yet. Nothing changes.
    Yield,

    /// Condition met; the next poll resumes at the given stage.
    Advance(S),

    /// Condition of the final stage met.
    Complete,
}

/// Kind-specific behaviour of a resumable task.
///
/// A machine owns its payload and evaluates stages on demand. It never
/// sees its own status or resume point: [`Resumable`] keeps those and
/// decides which method to call. Everything that must survive between
/// polls has to live in `self`, because each poll is an ordinary call.
pub trait Machine {
    /// The machine's resume points.
    type Stage: Stage;

    /// Kind name used in logs.
    const KIND: &'static str;

    /// Stage entered on the first poll.
    const FIRST: Self::Stage;

    /// Runs once, on the first poll.
    ///
    /// Captures poll-time payload fields and emits the "started" event.
    fn start(&mut self, cx: &mut Context<'_>);

    /// Evaluates the boundary condition of `stage`.
    ///
    /// When the condition holds the machine performs the stage's
    /// completion action (usually emitting an event) before returning
    /// [`Transition::Advance`] or [`Transition::Complete`].
    fn poll_stage(&mut self, stage: Self::Stage, cx: &mut Context<'_>) -> Transition<Self::Stage>;
}

/// Lifecycle position, with the stage carried where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase<S> {
    Pending,
    Active(S),
    /// Holds the stage the machine completed from.
    Complete(S),
}

/// Drives a [`Machine`] through the poll-resume protocol.
///
/// - first poll: [`Machine::start`], then `Active` at [`Machine::FIRST`],
///   whose condition is checked right away;
/// - later polls: one [`Machine::poll_stage`] call at the resume point;
/// - once complete: no-op.
///
/// A poll evaluates exactly one boundary condition. After an advance
/// the next condition is checked on the following poll.
pub struct Resumable<M: Machine> {
    /// Payload and stage logic.
    machine: M,

    /// Status and resume point.
    phase: Phase<M::Stage>,
}

impl<M: Machine> Resumable<M> {
    /// Wraps a fully populated machine in a `Pending` task.
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            phase: Phase::Pending,
        }
    }

    /// The wrapped machine.
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// The stage the next poll resumes at, or the final stage once
    /// complete. `None` before the first poll.
    pub fn stage(&self) -> Option<M::Stage> {
        match self.phase {
            Phase::Pending => None,
            Phase::Active(stage) | Phase::Complete(stage) => Some(stage),
        }
    }
}

impl<M: Machine + fmt::Debug> fmt::Debug for Resumable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resumable")
            .field("machine", &self.machine)
            .field("phase", &self.phase)
            .finish()
    }
}

impl<M: Machine> Resumable<M> {
    /// Evaluates the boundary condition of `stage` and applies the result.
    fn resume(&mut self, stage: M::Stage, cx: &mut Context<'_>) {
        match self.machine.poll_stage(stage, cx) {
            Transition::Yield => {}

            Transition::Advance(next) if next.ordinal() > stage.ordinal() => {
                self.phase = Phase::Active(next);

                debug!(task = %cx.id(), kind = M::KIND, from = ?stage, to = ?next, "stage advanced");
            }

            Transition::Advance(next) => {
                warn!(
                    task = %cx.id(),
                    kind = M::KIND,
                    from = ?stage,
                    to = ?next,
                    "ignoring non-forward stage transition"
                );
            }

            Transition::Complete => {
                self.phase = Phase::Complete(stage);

                debug!(task = %cx.id(), kind = M::KIND, "task complete");
            }
        }
    }
}

impl<M: Machine> Task for Resumable<M> {
    fn kind(&self) -> &'static str {
        M::KIND
    }

    fn status(&self) -> Status {
        match self.phase {
            Phase::Pending => Status::Pending,
            Phase::Active(_) => Status::Active,
            Phase::Complete(_) => Status::Complete,
        }
    }

    fn resume_point(&self) -> Option<u32> {
        self.stage().map(Stage::ordinal)
    }

    fn step(&mut self, cx: &mut Context<'_>) {
        match self.phase {
            Phase::Complete(_) => {}

            Phase::Pending => {
                self.machine.start(cx);
                self.phase = Phase::Active(M::FIRST);

                debug!(task = %cx.id(), kind = M::KIND, stage = ?M::FIRST, "task activated");

                self.resume(M::FIRST, cx);
            }

            Phase::Active(stage) => self.resume(stage, cx),
        }
    }
}
