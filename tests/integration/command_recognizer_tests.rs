//! `CommandRecognizer` against real child processes (Unix shells only).
#![cfg(unix)]

use std::sync::Arc;
use std::time::Duration;

use nexus_task::dictation::{
    CommandRecognizer, DictationBridge, DictationOutcome, DictationState, RecognizerSettings,
    SpeechRecognizer,
};
use nexus_task::AppError;

fn sh(script: &str, timeout: Duration) -> CommandRecognizer {
    CommandRecognizer::new("sh", vec!["-c".into(), script.into()], timeout)
}

#[tokio::test]
async fn first_non_blank_line_is_transcript() {
    let recognizer = sh("printf '\\n  hello world \\nsecond\\n'", Duration::from_secs(5));
    let text = recognizer
        .recognize(&RecognizerSettings::default())
        .await
        .expect("recognizer runs");
    assert_eq!(text.as_deref(), Some("hello world"));
}

#[tokio::test]
async fn settings_are_passed_through_environment() {
    let recognizer = sh(
        "echo \"$NEXUS_DICTATION_LOCALE $NEXUS_DICTATION_INTERIM_RESULTS $NEXUS_DICTATION_MAX_ALTERNATIVES\"",
        Duration::from_secs(5),
    );
    let text = recognizer
        .recognize(&RecognizerSettings::default())
        .await
        .unwrap();
    assert_eq!(text.as_deref(), Some("en-US false 1"));
}

#[tokio::test]
async fn silent_program_is_no_result() {
    let recognizer = sh("exit 0", Duration::from_secs(5));
    let text = recognizer
        .recognize(&RecognizerSettings::default())
        .await
        .unwrap();
    assert_eq!(text, None);
}

#[tokio::test]
async fn non_zero_exit_is_error() {
    let recognizer = sh("echo partial; exit 3", Duration::from_secs(5));
    let result = recognizer.recognize(&RecognizerSettings::default()).await;
    assert!(matches!(result, Err(AppError::Dictation(_))), "got {result:?}");
}

#[tokio::test]
async fn missing_program_is_error() {
    let recognizer = CommandRecognizer::new(
        "nexus-task-no-such-recognizer",
        Vec::new(),
        Duration::from_secs(5),
    );
    let result = recognizer.recognize(&RecognizerSettings::default()).await;
    assert!(
        matches!(result, Err(AppError::Dictation(ref msg)) if msg.contains("failed to start")),
        "got {result:?}"
    );
}

#[tokio::test]
async fn timeout_is_no_result() {
    let recognizer = sh("sleep 5; echo too late", Duration::from_millis(200));
    let text = recognizer
        .recognize(&RecognizerSettings::default())
        .await
        .unwrap();
    assert_eq!(text, None);
}

#[tokio::test]
async fn bridge_over_command_recognizer() {
    let recognizer: Arc<dyn SpeechRecognizer> =
        Arc::new(sh("echo buy stamps", Duration::from_secs(5)));
    let bridge = DictationBridge::new(Some(recognizer), RecognizerSettings::default());

    assert_eq!(
        bridge.listen_once().await.unwrap(),
        DictationOutcome::Transcript("buy stamps".into())
    );

    let failing: Arc<dyn SpeechRecognizer> = Arc::new(sh("exit 1", Duration::from_secs(5)));
    let bridge = DictationBridge::new(Some(failing), RecognizerSettings::default());
    assert_eq!(bridge.listen_once().await.unwrap(), DictationOutcome::Cancelled);
    assert_eq!(bridge.state(), DictationState::Idle);
}
