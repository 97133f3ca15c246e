use std::io::Write as _;

use nexus_task::config::GlobalConfig;
use nexus_task::models::{Category, Filter, Priority};
use nexus_task::AppError;

fn sample_toml() -> &'static str {
    r#"
seed_samples = false

[defaults]
priority = "high"
category = "health"
filter = "pending"

[dictation]
locale = "en-GB"
interim_results = false
max_alternatives = 2
command = "stt-once"
args = ["--single"]
timeout_seconds = 10
"#
}

#[test]
fn parses_valid_config() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    assert!(!config.seed_samples);
    assert_eq!(config.defaults.priority, Priority::High);
    assert_eq!(config.defaults.category, Category::Health);
    assert_eq!(config.defaults.filter, Filter::Pending);
    assert_eq!(config.dictation.locale, "en-GB");
    assert_eq!(config.dictation.max_alternatives, 2);
    assert_eq!(config.dictation.command.as_deref(), Some("stt-once"));
    assert_eq!(config.dictation.args, ["--single"]);
    assert_eq!(config.dictation.timeout_seconds, 10);
}

#[test]
fn empty_config_uses_defaults() {
    let config = GlobalConfig::from_toml_str("").expect("empty config parses");

    assert_eq!(config, GlobalConfig::default());
    assert!(config.seed_samples);
    assert_eq!(config.defaults.priority, Priority::Medium);
    assert_eq!(config.defaults.category, Category::Work);
    assert_eq!(config.defaults.filter, Filter::All);
    assert!(config.dictation.command.is_none());
}

#[test]
fn default_recognizer_settings() {
    let settings = GlobalConfig::default().dictation.recognizer_settings();
    assert_eq!(settings.locale, "en-US");
    assert!(!settings.interim_results);
    assert_eq!(settings.max_alternatives, 1);
}

#[test]
fn unknown_filter_falls_back_to_all() {
    let config = GlobalConfig::from_toml_str(
        r#"
[defaults]
filter = "other"
"#,
    )
    .expect("config parses");
    assert_eq!(config.defaults.filter, Filter::All);
}

#[test]
fn filter_name_is_case_sensitive() {
    let config = GlobalConfig::from_toml_str(
        r#"
[defaults]
filter = "Pending"
"#,
    )
    .expect("config parses");
    assert_eq!(config.defaults.filter, Filter::All);
}

#[test]
fn unknown_priority_is_rejected() {
    let result = GlobalConfig::from_toml_str(
        r#"
[defaults]
priority = "urgent"
"#,
    );
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn zero_max_alternatives_is_rejected() {
    let result = GlobalConfig::from_toml_str(
        r"
[dictation]
max_alternatives = 0
",
    );
    assert!(
        matches!(result, Err(AppError::Config(ref msg)) if msg.contains("max_alternatives")),
        "got {result:?}"
    );
}

#[test]
fn zero_timeout_is_rejected() {
    let result = GlobalConfig::from_toml_str(
        r"
[dictation]
timeout_seconds = 0
",
    );
    assert!(matches!(result, Err(AppError::Config(ref msg)) if msg.contains("timeout_seconds")));
}

#[test]
fn blank_locale_and_command_are_rejected() {
    let blank_locale = GlobalConfig::from_toml_str(
        r#"
[dictation]
locale = "  "
"#,
    );
    assert!(matches!(blank_locale, Err(AppError::Config(ref msg)) if msg.contains("locale")));

    let blank_command = GlobalConfig::from_toml_str(
        r#"
[dictation]
command = ""
"#,
    );
    assert!(matches!(blank_command, Err(AppError::Config(ref msg)) if msg.contains("command")));
}

#[test]
fn invalid_toml_is_config_error() {
    let result = GlobalConfig::from_toml_str("seed_samples = maybe");
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn loads_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(sample_toml().as_bytes()).expect("write config");

    let config = GlobalConfig::load_from_path(file.path()).expect("config loads");
    assert_eq!(config.dictation.locale, "en-GB");
}

#[test]
fn missing_file_is_config_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let result = GlobalConfig::load_from_path(temp.path().join("absent.toml"));
    assert!(
        matches!(result, Err(AppError::Config(ref msg)) if msg.contains("failed to read config"))
    );
}
