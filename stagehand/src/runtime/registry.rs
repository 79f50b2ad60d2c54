use crate::task::{Status, Task, TaskId};

use tracing::debug;

/// Append-only collection of tasks, in registration order.
///
/// The registry owns its tasks exclusively. Tasks are never removed:
/// a finished task stays at [`Status::Complete`] until the registry is
/// dropped.
#[derive(Default)]
pub struct Registry {
    tasks: Vec<Box<dyn Task>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task and returns its id.
    ///
    /// The task is expected to be [`Status::Pending`]; tasks built by
    /// this crate always are until their first poll.
    pub fn register<T: Task + 'static>(&mut self, task: T) -> TaskId {
        self.register_boxed(Box::new(task))
    }

    /// Appends an already boxed task and returns its id.
    pub fn register_boxed(&mut self, task: Box<dyn Task>) -> TaskId {
        debug_assert_eq!(
            task.status(),
            Status::Pending,
            "registered task has already been polled"
        );

        let id = TaskId::new(self.tasks.len());

        debug!(task = %id, kind = task.kind(), "task registered");

        self.tasks.push(task);
        id
    }

    /// Returns `true` iff every registered task is complete.
    ///
    /// An empty registry is trivially done.
    pub fn all_done(&self) -> bool {
        self.tasks.iter().all(|t| t.status().is_complete())
    }

    /// Number of tasks that are not complete yet.
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !t.status().is_complete())
            .count()
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task registered under `id`.
    pub fn get(&self, id: TaskId) -> Option<&dyn Task> {
        self.tasks.get(id.index()).map(|t| t.as_ref())
    }

    /// Returns the status of the task registered under `id`.
    pub fn status(&self, id: TaskId) -> Option<Status> {
        self.get(id).map(|t| t.status())
    }

    /// Iterates over tasks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &dyn Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (TaskId::new(i), t.as_ref()))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (TaskId, &mut Box<dyn Task>)> + '_ {
        self.tasks
            .iter_mut()
            .enumerate()
            .map(|(i, t)| (TaskId::new(i), t))
    }
}
