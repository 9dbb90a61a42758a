//! Task statistics value objects.

use chrono::TimeDelta;

use crate::Id;

/// Total time a user spent on one task within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDuration {
    /// The task.
    pub task_id: Id,
    /// Accumulated, never negative.
    pub duration: TimeDelta,
}

impl TaskDuration {
    /// Whole seconds of the accumulated duration.
    pub fn seconds(&self) -> i64 {
        self.duration.num_seconds()
    }
}
