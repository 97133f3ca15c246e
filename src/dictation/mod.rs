//! One-shot speech-to-text capture behind a capability trait.
//!
//! [`DictationBridge`] wraps an optional [`SpeechRecognizer`]. Hosts
//! without a recognizer get [`DictationOutcome::Unavailable`] straight
//! away; otherwise a single utterance is captured per
//! [`listen_once`](DictationBridge::listen_once) call.
//!
//! ## State machine
//!
//! ```text
//! Idle ──listen_once──▶ Listening ──transcript──▶ Idle
//!                                 └─error/none──▶ Idle
//! ```
//!
//! A second `listen_once` while `Listening` is rejected with
//! [`AppError::DictationBusy`]; the in-flight capture is unaffected.

pub mod command;

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::config::DictationConfig;
use crate::{AppError, Result};

pub use command::CommandRecognizer;

/// Recognizer configuration passed on every capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerSettings {
    /// BCP 47 language tag.
    pub locale: String,
    /// Whether partial hypotheses are requested. Always `false` by default.
    pub interim_results: bool,
    /// Number of alternatives requested; only the first is used.
    pub max_alternatives: u32,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

/// External speech-to-text capability.
pub trait SpeechRecognizer: Send + Sync {
    /// Capture one utterance.
    ///
    /// `Ok(Some(text))` is a transcript, `Ok(None)` means the recognizer
    /// ended without producing a result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dictation`] if the recognizer fails.
    fn recognize<'a>(
        &'a self,
        settings: &'a RecognizerSettings,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + 'a>>;
}

/// Result of a single capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationOutcome {
    /// First transcript, trimmed.
    Transcript(String),
    /// Recognizer errored or ended without a result.
    Cancelled,
    /// The host offers no recognizer.
    Unavailable,
}

/// Observable bridge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    /// No capture in flight.
    Idle,
    /// A capture is in flight.
    Listening,
}

/// Single-session gateway to a [`SpeechRecognizer`].
pub struct DictationBridge {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    settings: RecognizerSettings,
    listening: AtomicBool,
}

impl std::fmt::Debug for DictationBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictationBridge")
            .field("available", &self.is_available())
            .field("settings", &self.settings)
            .field("state", &self.state())
            .finish()
    }
}

impl DictationBridge {
    /// Construct a bridge over an optional recognizer.
    #[must_use]
    pub fn new(recognizer: Option<Arc<dyn SpeechRecognizer>>, settings: RecognizerSettings) -> Self {
        Self {
            recognizer,
            settings,
            listening: AtomicBool::new(false),
        }
    }

    /// Construct a bridge for a host without speech recognition.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(None, RecognizerSettings::default())
    }

    /// Build the bridge described by the `[dictation]` config table.
    ///
    /// Without a configured command the bridge is unavailable.
    #[must_use]
    pub fn from_config(config: &DictationConfig) -> Self {
        let recognizer = CommandRecognizer::from_config(config)
            .map(|recognizer| Arc::new(recognizer) as Arc<dyn SpeechRecognizer>);
        Self::new(recognizer, config.recognizer_settings())
    }

    /// Whether a recognizer is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Settings passed to the recognizer.
    #[must_use]
    pub fn settings(&self) -> &RecognizerSettings {
        &self.settings
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DictationState {
        if self.listening.load(Ordering::Acquire) {
            DictationState::Listening
        } else {
            DictationState::Idle
        }
    }

    /// Capture one utterance.
    ///
    /// Recognizer failures and empty results resolve to
    /// [`DictationOutcome::Cancelled`]; the bridge is back to
    /// [`DictationState::Idle`] once this returns or its future is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DictationBusy`] if a capture is already in flight.
    pub async fn listen_once(&self) -> Result<DictationOutcome> {
        let Some(recognizer) = self.recognizer.as_ref() else {
            info!("speech recognition unavailable on this host");
            return Ok(DictationOutcome::Unavailable);
        };

        let _guard = ListeningGuard::acquire(&self.listening)?;
        let span = info_span!("listen_once", locale = %self.settings.locale);

        let result = recognizer.recognize(&self.settings).instrument(span).await;
        let outcome = match result {
            Ok(Some(text)) if !text.trim().is_empty() => {
                debug!(chars = text.len(), "transcript received");
                DictationOutcome::Transcript(text.trim().to_owned())
            }
            Ok(_) => {
                debug!("recognizer ended without a result");
                DictationOutcome::Cancelled
            }
            Err(err) => {
                warn!(%err, "speech recognition failed");
                DictationOutcome::Cancelled
            }
        };
        Ok(outcome)
    }
}

/// Holds the `Listening` flag for the lifetime of one capture.
struct ListeningGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ListeningGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::DictationBusy)?;
        Ok(Self { flag })
    }
}

impl Drop for ListeningGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
