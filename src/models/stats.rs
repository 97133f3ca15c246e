//! Aggregate counters derived from the task list.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Live counters shown above the task list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Stats {
    /// Tasks with `completed == true`.
    pub completed: usize,
    /// Tasks with `completed == false`.
    pub pending: usize,
    /// Pending tasks with high priority.
    pub high_priority_pending: usize,
}

impl Stats {
    /// Count the given tasks in a single pass.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            if task.completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            if task.is_high_priority_pending() {
                stats.high_priority_pending += 1;
            }
            stats
        })
    }
}
