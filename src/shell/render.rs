//! Plain-text rendering of store state.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::models::{Category, Filter, Priority, Stats, Task};

/// Shown when the active filter selects nothing.
pub const EMPTY_STATE: &str = "No tasks found. Add a new task!";

/// Counter header.
#[must_use]
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Completed: {}  Pending: {}  High Priority: {}",
        stats.completed, stats.pending, stats.high_priority_pending
    )
}

/// Filter bar with the active filter bracketed.
#[must_use]
pub fn render_filter_bar(active: Filter) -> String {
    let names: Vec<String> = Filter::ALL_VARIANTS
        .iter()
        .map(|filter| {
            if *filter == active {
                format!("[{filter}]")
            } else {
                filter.to_string()
            }
        })
        .collect();
    format!("Filter: {}", names.join(" "))
}

/// Short month and day, e.g. `Oct 15`.
#[must_use]
pub fn format_short_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %-d").to_string()
}

/// One task line.
#[must_use]
pub fn render_task(task: &Task) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let date = format_short_date(&task.created_at.with_timezone(&Local));
    format!(
        "{check} #{id} {text}  ({priority} | {category} | {date})",
        id = task.id,
        text = task.text,
        priority = task.priority,
        category = task.category,
    )
}

/// Everything the shell needs to draw one screen.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Counters for the whole store.
    pub stats: Stats,
    /// Tasks selected by the active filter.
    pub tasks: &'a [&'a Task],
    /// Active filter.
    pub filter: Filter,
    /// Pending input text.
    pub draft: &'a str,
    /// Selected priority for new tasks.
    pub priority: Priority,
    /// Selected category for new tasks.
    pub category: Category,
}

/// Full screen: counters, input controls, filter bar, list.
#[must_use]
pub fn render_view(view: &View<'_>) -> String {
    let mut lines = vec![
        render_stats(&view.stats),
        format!(
            "Draft: \"{}\"  Priority: {}  Category: {}",
            view.draft, view.priority, view.category
        ),
        render_filter_bar(view.filter),
    ];

    if view.tasks.is_empty() {
        lines.push(EMPTY_STATE.to_owned());
    } else {
        lines.extend(view.tasks.iter().map(|task| render_task(task)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
