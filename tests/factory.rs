use chrono::Local;
use joblog::config::{Config, DestinationConfig, MessageTypeConfig};
use joblog::fmt::{SHORT_DATE_FORMAT, file_date};
use joblog::{DestinationKind, Error, Logger, Severity, create_destinations};
use std::fs;
use tempfile::TempDir;

fn config_with(destinations: Vec<DestinationConfig>) -> Config {
    Config {
        destinations,
        message_types: vec![MessageTypeConfig::named("message")],
        ..Config::default()
    }
}

#[test]
fn dispatch_is_case_insensitive_and_ordered() {
    let tmp_dir = TempDir::new().unwrap();
    let mut config = config_with(vec![
        DestinationConfig::named("FILE"),
        DestinationConfig::named("Console"),
        DestinationConfig::named("database")
            .connection_string(format!("sqlite://{}?mode=rwc", tmp_dir.path().join("l.db").display())),
    ]);
    config.file_settings.insert(
        "LogFileDirectory".to_string(),
        tmp_dir.path().to_string_lossy().into_owned(),
    );

    let kinds: Vec<DestinationKind> = create_destinations(&config)
        .unwrap()
        .iter()
        .map(|d| d.kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            DestinationKind::File,
            DestinationKind::Console,
            DestinationKind::Database
        ]
    );
}

#[test]
fn unknown_and_disabled_names_are_dropped() {
    let config = config_with(vec![
        DestinationConfig::named("smtp"),
        DestinationConfig::named("console").enabled(false),
        DestinationConfig::named("console"),
    ]);

    let destinations = create_destinations(&config).unwrap();
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].kind(), DestinationKind::Console);
}

#[test]
fn database_without_connection_string_is_a_config_error() {
    for entry in [
        DestinationConfig::named("database"),
        DestinationConfig::named("Database").connection_string("  "),
    ] {
        let err = create_destinations(&config_with(vec![entry])).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.is_fatal());
    }
}

#[test]
fn file_destination_uses_configured_directory() {
    let tmp_dir = TempDir::new().unwrap();
    let log_dir = tmp_dir.path().join("jobs");
    let mut config = config_with(vec![DestinationConfig::named("file")]);
    config.file_settings.insert(
        "LogFileDirectory".to_string(),
        log_dir.to_string_lossy().into_owned(),
    );

    let logger = Logger::from_config_with(&config).unwrap();
    logger.message("configured").unwrap();

    let expected = log_dir.join(format!(
        "LogFile{}.txt",
        file_date(&Local::now(), SHORT_DATE_FORMAT)
    ));
    assert!(fs::read_to_string(expected).unwrap().contains("configured"));
}

#[test]
fn from_config_without_destinations_fails() {
    let config = config_with(vec![DestinationConfig::named("pager")]);
    let err = Logger::from_config_with(&config).unwrap_err();
    assert!(matches!(err, Error::NoDestinations));
}

#[test]
fn from_config_without_message_types_fails() {
    let config = Config {
        destinations: vec![DestinationConfig::named("console")],
        ..Config::default()
    };
    let err = Logger::from_config_with(&config).unwrap_err();
    assert!(matches!(err, Error::NoSeverities));
}

#[test]
fn from_config_reads_full_toml() {
    let config = Config::parse(
        r#"
[[destinations]]
name = "console"
colors = false

[[message_types]]
type = "warning"
"#,
    )
    .unwrap();

    let logger = Logger::from_config_with(&config).unwrap();
    assert_eq!(logger.destination_names(), vec!["console"]);
    assert_eq!(logger.enabled_severities(), vec![Severity::Warning]);
}
