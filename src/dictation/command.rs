//! Speech recognizer backed by an external speech-to-text program.
//!
//! The program is spawned once per capture with stdin closed. Recognizer
//! settings are passed through the environment:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `NEXUS_DICTATION_LOCALE` | locale tag, e.g. `en-US` |
//! | `NEXUS_DICTATION_INTERIM_RESULTS` | `true` / `false` |
//! | `NEXUS_DICTATION_MAX_ALTERNATIVES` | integer, at least 1 |
//!
//! The first non-blank stdout line is the transcript. A non-zero exit is a
//! recognizer error; running past the timeout counts as no result.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use super::{RecognizerSettings, SpeechRecognizer};
use crate::config::DictationConfig;
use crate::{AppError, Result};

/// Runs a configured program for each capture.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandRecognizer {
    /// Construct a recognizer for `program` with fixed arguments.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Build from the `[dictation]` table, if a command is configured.
    #[must_use]
    pub fn from_config(config: &DictationConfig) -> Option<Self> {
        config.command.as_ref().map(|program| {
            Self::new(
                program.clone(),
                config.args.clone(),
                Duration::from_secs(config.timeout_seconds),
            )
        })
    }

    async fn run(&self, settings: &RecognizerSettings) -> Result<Option<String>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env("NEXUS_DICTATION_LOCALE", &settings.locale)
            .env(
                "NEXUS_DICTATION_INTERIM_RESULTS",
                settings.interim_results.to_string(),
            )
            .env(
                "NEXUS_DICTATION_MAX_ALTERNATIVES",
                settings.max_alternatives.to_string(),
            )
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|err| {
            AppError::Dictation(format!("failed to start '{}': {err}", self.program))
        })?;
        debug!(program = %self.program, pid = ?child.id(), "recognizer started");

        // Dropping the wait future on timeout drops the child, which kills it.
        let Ok(waited) = tokio::time::timeout(self.timeout, child.wait_with_output()).await else {
            warn!(
                program = %self.program,
                timeout_secs = self.timeout.as_secs(),
                "recognizer timed out"
            );
            return Ok(None);
        };
        let output = waited
            .map_err(|err| AppError::Dictation(format!("failed to wait for recognizer: {err}")))?;

        if !output.status.success() {
            return Err(AppError::Dictation(format!(
                "recognizer exited with {}",
                output.status
            )));
        }

        Ok(first_transcript_line(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn recognize<'a>(
        &'a self,
        settings: &'a RecognizerSettings,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + 'a>> {
        Box::pin(self.run(settings))
    }
}

/// First non-blank line of recognizer output, trimmed.
pub(crate) fn first_transcript_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_owned)
}
