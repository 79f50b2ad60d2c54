use std::fmt;

/// Lifecycle status of a task.
///
/// Transitions are strictly `Pending → Active → Complete`. A task never
/// goes back, and never re-enters `Pending` once it has been polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Task is registered but has never been polled.
    ///
    /// Its payload is fully populated but poll-time fields (such as a
    /// start instant) are not captured yet.
    Pending,

    /// Task has been polled at least once and is waiting on a stage.
    ///
    /// Every poll re-enters at the recorded resume point.
    Active,

    /// Task has finished its final stage.
    ///
    /// Further polls are no-ops.
    Complete,
}

impl Status {
    /// Returns `true` for [`Status::Complete`].
    pub fn is_complete(self) -> bool {
        self == Status::Complete
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => f.write_str("pending"),
            Status::Active => f.write_str("active"),
            Status::Complete => f.write_str("complete"),
        }
    }
}
