//! Named display filters over the task list.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::task::{Category, Task};

/// Filter criterion selecting a subset of tasks for display.
///
/// The `other` category has no filter of its own; unrecognised names,
/// `other` included, resolve to [`Filter::All`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
    /// High-priority tasks that are still pending.
    High,
    /// Tasks in the work category.
    Work,
    /// Tasks in the personal category.
    Personal,
    /// Tasks in the health category.
    Health,
}

impl Filter {
    /// Every filter, in filter-bar order.
    pub const ALL_VARIANTS: [Self; 7] = [
        Self::All,
        Self::Pending,
        Self::Completed,
        Self::High,
        Self::Work,
        Self::Personal,
        Self::Health,
    ];

    /// Resolve a filter name by exact match, falling back to
    /// [`Filter::All`] for anything else (case and padding included).
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        match name {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "high" => Self::High,
            "work" => Self::Work,
            "personal" => Self::Personal,
            "health" => Self::Health,
            _ => Self::All,
        }
    }

    /// Wire name of the filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::High => "high",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
        }
    }

    /// Predicate for this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
            Self::High => task.is_high_priority_pending(),
            Self::Work => task.category == Category::Work,
            Self::Personal => task.category == Category::Personal,
            Self::Health => task.category == Category::Health,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
