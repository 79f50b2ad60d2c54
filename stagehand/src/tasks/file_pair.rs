use crate::event::{Event, Slot};
use crate::runtime::context::Context;
use crate::task::{Machine, Stage, Transition};

use std::path::PathBuf;

/// Resume points of a [`FilePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePairStage {
    /// Waiting for the first file to become ready.
    WaitingOnA,
    /// Waiting for the second file to become ready.
    WaitingOnB,
}

impl Stage for FilePairStage {
    fn ordinal(self) -> u32 {
        match self {
            FilePairStage::WaitingOnA => 0,
            FilePairStage::WaitingOnB => 1,
        }
    }
}

/// Waits for two files to become non-empty, strictly one after the other.
///
/// `B` is only probed once `A` has been seen ready, so "B ready" can
/// never be reported before "A ready", even if `B` was written first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    first: PathBuf,
    second: PathBuf,
}

impl FilePair {
    /// Creates the payload for waiting on `first`, then `second`.
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Machine for FilePair {
    type Stage = FilePairStage;

    const KIND: &'static str = "file-pair";
    const FIRST: FilePairStage = FilePairStage::WaitingOnA;

    fn start(&mut self, cx: &mut Context<'_>) {
        cx.emit(Event::WaitStarted {
            task: cx.id(),
            resource: self.first.clone(),
        });
    }

    fn poll_stage(
        &mut self,
        stage: FilePairStage,
        cx: &mut Context<'_>,
    ) -> Transition<FilePairStage> {
        match stage {
            FilePairStage::WaitingOnA => {
                if !cx.is_ready(&self.first) {
                    return Transition::Yield;
                }

                cx.emit(Event::ResourceReady {
                    task: cx.id(),
                    slot: Slot::A,
                });
                cx.emit(Event::WaitStarted {
                    task: cx.id(),
                    resource: self.second.clone(),
                });

                Transition::Advance(FilePairStage::WaitingOnB)
            }

            FilePairStage::WaitingOnB => {
                if !cx.is_ready(&self.second) {
                    return Transition::Yield;
                }

                cx.emit(Event::ResourceReady {
                    task: cx.id(),
                    slot: Slot::B,
                });

                Transition::Complete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Probe;
    use crate::observer::Recorder;
    use crate::task::{Resumable, Status, Task, TaskId};
    use crate::time::ManualClock;

    use std::collections::HashSet;
    use std::path::Path;

    #[derive(Default)]
    struct Ready(HashSet<PathBuf>);

    impl Probe for Ready {
        fn is_ready(&self, resource: &Path) -> bool {
            self.0.contains(resource)
        }
    }

    fn step(task: &mut Resumable<FilePair>, probe: &Ready, recorder: &mut Recorder) {
        let clock = ManualClock::new();
        let mut cx = Context::new(TaskId::new(4), probe, &clock, recorder);
        task.step(&mut cx);
    }

    #[test]
    fn waits_on_a_then_b() {
        let mut task = Resumable::new(FilePair::new("a", "b"));
        let mut probe = Ready::default();
        let mut recorder = Recorder::new();

        step(&mut task, &probe, &mut recorder);
        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.stage(), Some(FilePairStage::WaitingOnA));
        assert_eq!(recorder.lines(), ["begin waiting on a"]);

        probe.0.insert(PathBuf::from("a"));
        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.stage(), Some(FilePairStage::WaitingOnB));
        assert_eq!(task.status(), Status::Active);

        probe.0.insert(PathBuf::from("b"));
        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.status(), Status::Complete);

        assert_eq!(
            recorder.lines(),
            [
                "begin waiting on a",
                "A ready",
                "begin waiting on b",
                "B ready"
            ]
        );
        assert!(recorder.events().iter().all(|e| e.task() == Some(TaskId::new(4))));
    }

    #[test]
    fn b_first_does_not_skip_a() {
        let mut task = Resumable::new(FilePair::new("a", "b"));
        let mut probe = Ready::default();
        let mut recorder = Recorder::new();

        probe.0.insert(PathBuf::from("b"));

        for _ in 0..5 {
            step(&mut task, &probe, &mut recorder);
        }
        assert_eq!(task.stage(), Some(FilePairStage::WaitingOnA));
        assert_eq!(recorder.lines(), ["begin waiting on a"]);

        probe.0.insert(PathBuf::from("a"));
        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.status(), Status::Active);

        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.status(), Status::Complete);
        assert_eq!(recorder.lines()[1..], ["A ready", "begin waiting on b", "B ready"]);
    }

    #[test]
    fn both_ready_still_takes_one_poll_per_stage() {
        let mut task = Resumable::new(FilePair::new("a", "b"));
        let probe = Ready(["a", "b"].into_iter().map(PathBuf::from).collect());
        let mut recorder = Recorder::new();

        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.stage(), Some(FilePairStage::WaitingOnB));
        assert_eq!(task.status(), Status::Active);

        step(&mut task, &probe, &mut recorder);
        assert_eq!(task.status(), Status::Complete);
        assert_eq!(task.resume_point(), Some(1));
    }
}
