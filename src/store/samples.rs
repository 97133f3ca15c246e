//! Starter tasks shown on first launch.

use crate::models::{Category, Priority};

/// `(text, priority, category, completed)` for each starter task.
pub(crate) const SAMPLE_TASKS: [(&str, Priority, Category, bool); 4] = [
    ("Design new dashboard UI", Priority::High, Category::Work, false),
    ("Call with project team", Priority::Medium, Category::Work, true),
    ("Buy groceries", Priority::Low, Category::Personal, false),
    ("Morning workout", Priority::Medium, Category::Health, false),
];
