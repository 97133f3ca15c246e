//! Task model and its closed tag enumerations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Store-assigned task identifier.
///
/// Drawn from a per-store counter; never reused within one store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|err| AppError::InvalidValue(format!("task id '{s}': {err}")))
    }
}

/// Urgency tag attached at creation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Medium urgency. Default selection.
    #[default]
    Medium,
    /// High urgency; counted by the high-priority pending stat.
    High,
}

impl Priority {
    /// Wire name used in config, commands and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AppError::InvalidValue(format!(
                "priority '{s}' (expected low, medium or high)"
            ))),
        }
    }
}

/// Topical tag attached at creation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Work items. Default selection.
    #[default]
    Work,
    /// Personal errands.
    Personal,
    /// Health and fitness.
    Health,
    /// Anything else.
    Other,
}

impl Category {
    /// Wire name used in config, commands and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(AppError::InvalidValue(format!(
                "category '{s}' (expected work, personal, health or other)"
            ))),
        }
    }
}

/// One user-entered to-do item.
///
/// Only `completed` changes after creation, and only through
/// [`TaskStore::toggle`](crate::store::TaskStore::toggle).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    /// Unique identifier within the owning store.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Urgency tag.
    pub priority: Priority,
    /// Topical tag.
    pub category: Category,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Construct a pending task stamped with the current time.
    #[must_use]
    pub fn new(id: TaskId, text: String, priority: Priority, category: Category) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
            category,
            created_at: Utc::now(),
        }
    }

    /// Whether this task counts toward the high-priority pending stat.
    #[must_use]
    pub fn is_high_priority_pending(&self) -> bool {
        self.priority == Priority::High && !self.completed
    }
}
