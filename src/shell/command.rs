//! Line command parsing for the interactive shell.

use crate::models::{Category, Filter, Priority, TaskId};
use crate::{AppError, Result};

/// Usage summary printed by `help` and after malformed input.
pub const USAGE: &str = "\
commands:
  add [text]            add a task (uses the draft when text is omitted)
  draft <text>          set the draft text
  priority <level>      select low, medium or high for new tasks
  category <name>       select work, personal, health or other for new tasks
  toggle <id>           flip a task between pending and completed
  delete <id>           remove a task
  filter <name>         show all, pending, completed, high, work, personal or health
  list                  redraw the task list
  stats                 show the counters
  dictate               capture the draft text by voice
  help                  show this message
  quit                  leave";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a task from the given text, or from the draft when `None`.
    Add(Option<String>),
    /// Replace the draft text.
    Draft(String),
    /// Select the priority for new tasks.
    Priority(Priority),
    /// Select the category for new tasks.
    Category(Category),
    /// Flip a task's completion flag.
    Toggle(TaskId),
    /// Remove a task.
    Delete(TaskId),
    /// Change the active filter.
    Filter(Filter),
    /// Redraw the current view.
    List,
    /// Print the counters.
    Stats,
    /// Capture the draft by voice.
    Dictate,
    /// Print usage.
    Help,
    /// Leave the shell.
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidValue` for unknown verbs, missing
    /// arguments, or arguments that do not parse.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Self::Add((!rest.is_empty()).then(|| rest.to_owned())),
            "draft" => Self::Draft(rest.to_owned()),
            "priority" => Self::Priority(required(verb, rest)?.parse()?),
            "category" => Self::Category(required(verb, rest)?.parse()?),
            "toggle" => Self::Toggle(required(verb, rest)?.parse()?),
            "delete" | "rm" => Self::Delete(required(verb, rest)?.parse()?),
            "filter" => Self::Filter(Filter::parse_lenient(required(verb, rest)?)),
            "list" | "ls" => Self::List,
            "stats" => Self::Stats,
            "dictate" | "voice" => Self::Dictate,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                return Err(AppError::InvalidValue(format!(
                    "unknown command '{verb}' (try 'help')"
                )))
            }
        };
        Ok(Some(command))
    }
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(AppError::InvalidValue(format!("'{verb}' needs an argument")))
    } else {
        Ok(rest)
    }
}
