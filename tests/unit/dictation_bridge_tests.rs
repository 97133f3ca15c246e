//! Unit tests for `DictationBridge` outcomes and state transitions.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use nexus_task::dictation::{
    DictationBridge, DictationOutcome, DictationState, RecognizerSettings, SpeechRecognizer,
};
use nexus_task::{AppError, Result};

/// Recognizer that returns a canned result and records the settings used.
struct CannedRecognizer {
    reply: fn() -> Result<Option<String>>,
    seen: Mutex<Vec<RecognizerSettings>>,
}

impl CannedRecognizer {
    fn new(reply: fn() -> Result<Option<String>>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl SpeechRecognizer for CannedRecognizer {
    fn recognize<'a>(
        &'a self,
        settings: &'a RecognizerSettings,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + 'a>> {
        self.seen.lock().unwrap().push(settings.clone());
        let reply = (self.reply)();
        Box::pin(async move { reply })
    }
}

fn bridge(recognizer: &Arc<CannedRecognizer>) -> DictationBridge {
    DictationBridge::new(
        Some(Arc::clone(recognizer) as Arc<dyn SpeechRecognizer>),
        RecognizerSettings::default(),
    )
}

#[tokio::test]
async fn unavailable_resolves_immediately() {
    let bridge = DictationBridge::unavailable();
    assert!(!bridge.is_available());

    let outcome = bridge.listen_once().await.expect("no error");
    assert_eq!(outcome, DictationOutcome::Unavailable);
    assert_eq!(bridge.state(), DictationState::Idle);
}

#[tokio::test]
async fn transcript_is_trimmed() {
    let recognizer = CannedRecognizer::new(|| Ok(Some("  buy milk \n".into())));
    let bridge = bridge(&recognizer);

    let outcome = bridge.listen_once().await.expect("no error");
    assert_eq!(outcome, DictationOutcome::Transcript("buy milk".into()));
    assert_eq!(bridge.state(), DictationState::Idle);
}

#[tokio::test]
async fn no_result_is_cancelled() {
    let recognizer = CannedRecognizer::new(|| Ok(None));
    let outcome = bridge(&recognizer).listen_once().await.unwrap();
    assert_eq!(outcome, DictationOutcome::Cancelled);
}

#[tokio::test]
async fn blank_transcript_is_cancelled() {
    let recognizer = CannedRecognizer::new(|| Ok(Some("   ".into())));
    let outcome = bridge(&recognizer).listen_once().await.unwrap();
    assert_eq!(outcome, DictationOutcome::Cancelled);
}

#[tokio::test]
async fn recognizer_error_is_cancelled_and_returns_to_idle() {
    let recognizer = CannedRecognizer::new(|| Err(AppError::Dictation("no microphone".into())));
    let bridge = bridge(&recognizer);

    let outcome = bridge.listen_once().await.expect("errors are absorbed");
    assert_eq!(outcome, DictationOutcome::Cancelled);
    assert_eq!(bridge.state(), DictationState::Idle);

    // May be invoked again after resolution.
    assert_eq!(bridge.listen_once().await.unwrap(), DictationOutcome::Cancelled);
}

#[tokio::test]
async fn passes_fixed_settings() {
    let recognizer = CannedRecognizer::new(|| Ok(Some("x".into())));
    bridge(&recognizer).listen_once().await.unwrap();

    let seen = recognizer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].locale, "en-US");
    assert!(!seen[0].interim_results);
    assert_eq!(seen[0].max_alternatives, 1);
}

#[test]
fn from_config_without_command_is_unavailable() {
    let config = nexus_task::GlobalConfig::default();
    let bridge = DictationBridge::from_config(&config.dictation);
    assert!(!bridge.is_available());
    assert_eq!(bridge.settings(), &RecognizerSettings::default());
}

#[test]
fn from_config_with_command_is_available() {
    let config = nexus_task::GlobalConfig::from_toml_str(
        r#"
[dictation]
command = "stt"
locale = "fr-FR"
"#,
    )
    .unwrap();
    let bridge = DictationBridge::from_config(&config.dictation);
    assert!(bridge.is_available());
    assert_eq!(bridge.settings().locale, "fr-FR");
}
