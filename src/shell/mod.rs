//! Interactive line-oriented front end.
//!
//! [`Shell`] owns the [`TaskStore`] and [`DictationBridge`], keeps the
//! input-control state (draft text, selected priority and category,
//! active filter) and turns each input line into store calls. It redraws
//! whenever the store publishes a [`StoreEvent`].

pub mod command;
pub mod render;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::GlobalConfig;
use crate::dictation::{DictationBridge, DictationOutcome};
use crate::models::{Category, Filter, Priority};
use crate::store::{StoreEvent, TaskStore};
use crate::{AppError, Result};

pub use command::{ShellCommand, USAGE};
pub use render::View;

/// Blocking notice for hosts without speech recognition.
pub const DICTATION_UNAVAILABLE: &str = "Voice recognition is not supported on this host";

const PROMPT: &str = "> ";

/// Output of one handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellResponse {
    /// Text to print; may be empty.
    pub output: String,
    /// Whether the shell should exit.
    pub quit: bool,
}

impl ShellResponse {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            output: String::new(),
            quit: true,
        }
    }
}

/// Shell state: the store, the dictation bridge, and the input controls.
#[derive(Debug)]
pub struct Shell {
    store: TaskStore,
    bridge: DictationBridge,
    events: broadcast::Receiver<StoreEvent>,
    draft: String,
    priority: Priority,
    category: Category,
    filter: Filter,
}

impl Shell {
    /// Construct a shell around an existing store and bridge.
    #[must_use]
    pub fn new(store: TaskStore, bridge: DictationBridge) -> Self {
        let events = store.subscribe();
        Self {
            store,
            bridge,
            events,
            draft: String::new(),
            priority: Priority::default(),
            category: Category::default(),
            filter: Filter::default(),
        }
    }

    /// Construct a shell as described by the configuration.
    #[must_use]
    pub fn from_config(config: &GlobalConfig) -> Self {
        let store = if config.seed_samples {
            TaskStore::with_samples()
        } else {
            TaskStore::new()
        };
        let mut shell = Self::new(store, DictationBridge::from_config(&config.dictation));
        shell.priority = config.defaults.priority;
        shell.category = config.defaults.category;
        shell.filter = config.defaults.filter;
        shell
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Priority selected for new tasks.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Category selected for new tasks.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Draw the current screen.
    #[must_use]
    pub fn render(&self) -> String {
        let tasks = self.store.filter(self.filter);
        render::render_view(&View {
            stats: self.store.stats(),
            tasks: &tasks,
            filter: self.filter,
            draft: &self.draft,
            priority: self.priority,
            category: self.category,
        })
    }

    /// Parse and execute one input line.
    pub async fn handle_line(&mut self, line: &str) -> ShellResponse {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => ShellResponse::text(String::new()),
            Err(err) => ShellResponse::text(err.to_string()),
        }
    }

    /// Execute a parsed command.
    pub async fn execute(&mut self, command: ShellCommand) -> ShellResponse {
        debug!(?command, "executing shell command");
        let mut response = match command {
            ShellCommand::Add(text) => {
                let from_draft = text.is_none();
                let text = text.unwrap_or_else(|| self.draft.clone());
                if self.store.add(&text, self.priority, self.category).is_some() && from_draft {
                    self.draft.clear();
                }
                ShellResponse::text(String::new())
            }
            ShellCommand::Draft(text) => {
                self.draft = text;
                ShellResponse::text(format!("Draft: \"{}\"", self.draft))
            }
            ShellCommand::Priority(priority) => {
                self.priority = priority;
                ShellResponse::text(format!("Priority: {priority}"))
            }
            ShellCommand::Category(category) => {
                self.category = category;
                ShellResponse::text(format!("Category: {category}"))
            }
            ShellCommand::Toggle(id) => {
                self.store.toggle(id);
                ShellResponse::text(String::new())
            }
            ShellCommand::Delete(id) => {
                self.store.delete(id);
                ShellResponse::text(String::new())
            }
            ShellCommand::Filter(filter) => {
                self.filter = filter;
                ShellResponse::text(self.render())
            }
            ShellCommand::List => ShellResponse::text(self.render()),
            ShellCommand::Stats => ShellResponse::text(render::render_stats(&self.store.stats())),
            ShellCommand::Dictate => ShellResponse::text(self.dictate().await),
            ShellCommand::Help => ShellResponse::text(USAGE),
            ShellCommand::Quit => ShellResponse::quit(),
        };

        if self.drain_events() {
            response.output.push_str(&self.render());
        }
        response
    }

    async fn dictate(&mut self) -> String {
        match self.bridge.listen_once().await {
            Ok(DictationOutcome::Transcript(text)) => {
                self.draft = text;
                format!("Draft: \"{}\"", self.draft)
            }
            Ok(DictationOutcome::Cancelled) => String::new(),
            Ok(DictationOutcome::Unavailable) => DICTATION_UNAVAILABLE.to_owned(),
            Err(err) => err.to_string(),
        }
    }

    /// Consume pending store events; `true` if any arrived.
    fn drain_events(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    debug!(stats = ?event.stats(), "store changed");
                    changed = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "shell lagged behind store events");
                    changed = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return changed,
            }
        }
    }

    /// Drive the shell from `input` until `quit`, end of input, or
    /// cancellation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, input: R, mut output: W, ct: CancellationToken) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        write_out(&mut output, &self.render()).await?;

        loop {
            write_out(&mut output, PROMPT).await?;

            let line = tokio::select! {
                () = ct.cancelled() => {
                    info!("shell cancelled");
                    break;
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                info!("end of input");
                break;
            };

            // Dropping an in-flight dictation kills the recognizer and frees the bridge.
            let response = tokio::select! {
                () = ct.cancelled() => {
                    info!("shell cancelled during command");
                    break;
                }
                response = self.handle_line(&line) => response,
            };
            if !response.output.is_empty() {
                write_out(&mut output, &response.output).await?;
                if !response.output.ends_with('\n') {
                    write_out(&mut output, "\n").await?;
                }
            }
            if response.quit {
                info!("shell quit requested");
                break;
            }
        }

        output.flush().await.map_err(AppError::from)
    }
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
