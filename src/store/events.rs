//! Change notifications published by [`TaskStore`](super::TaskStore).

use crate::models::{Stats, Task, TaskId};

/// One effective mutation of the task list.
///
/// Every event carries the counters recomputed after the mutation, so a
/// subscriber can redraw without reading the store back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended.
    Added {
        /// The newly created task.
        task: Task,
        /// Counters after the append.
        stats: Stats,
    },
    /// A task's completion flag was flipped.
    Toggled {
        /// Task whose flag changed.
        id: TaskId,
        /// New value of the flag.
        completed: bool,
        /// Counters after the flip.
        stats: Stats,
    },
    /// A task was removed.
    Deleted {
        /// Removed task.
        id: TaskId,
        /// Counters after the removal.
        stats: Stats,
    },
}

impl StoreEvent {
    /// Counters carried by this event.
    #[must_use]
    pub fn stats(&self) -> Stats {
        match self {
            Self::Added { stats, .. } | Self::Toggled { stats, .. } | Self::Deleted { stats, .. } => {
                *stats
            }
        }
    }
}
