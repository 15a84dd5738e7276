mod common;

use chrono::Local;
use common::{Recorder, call_log, calls};
use joblog::fmt::{SHORT_DATE_FORMAT, short_date};
use joblog::{Destination, FileDestination, Logger, Severity};
use std::fs;
use tempfile::TempDir;

#[test]
fn file_destination_writes_dated_line() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path());
    let path = file.current_file();

    let logger = Logger::builder()
        .all_severities()
        .destination(file)
        .build()
        .unwrap();
    logger.message("backup finished").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let today = short_date(&Local::now(), SHORT_DATE_FORMAT);
    assert_eq!(content, format!("{today} Message backup finished\n"));
}

#[test]
fn file_name_uses_dotted_date() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path());

    let expected = format!(
        "LogFile{}.txt",
        short_date(&Local::now(), SHORT_DATE_FORMAT).replace('/', ".")
    );
    assert_eq!(
        file.current_file().file_name().unwrap().to_string_lossy(),
        expected
    );
}

#[test]
fn file_destination_appends_multiple_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path());
    let path = file.current_file();

    file.emit("one", Severity::Message).unwrap();
    let first_len = fs::metadata(&path).unwrap().len();
    file.emit("two", Severity::Warning).unwrap();
    file.emit("three", Severity::Error).unwrap();
    let final_len = fs::metadata(&path).unwrap().len();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" Message one"));
    assert!(lines[1].ends_with(" Warning two"));
    assert!(lines[2].ends_with(" Error   three"));
    assert!(final_len >= first_len);
}

#[test]
fn file_destination_creates_nested_directory() {
    let tmp_dir = TempDir::new().unwrap();
    let nested = tmp_dir.path().join("a").join("b").join("c");
    let file = FileDestination::in_directory(&nested);
    let path = file.current_file();
    assert!(!nested.exists());

    file.emit("made it", Severity::Message).unwrap();

    assert!(nested.is_dir());
    assert!(path.exists());
}

#[test]
fn file_destination_ignores_blank_input() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path());

    file.emit("   ", Severity::Message).unwrap();

    assert!(!file.current_file().exists());
}

#[test]
fn unwritable_directory_fails_without_stopping_other_destinations() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("not-a-dir");
    fs::write(&blocker, "plain file").unwrap();

    let log = call_log();
    let logger = Logger::builder()
        .all_severities()
        .destination(FileDestination::in_directory(blocker.join("logs")))
        .destination(Recorder::new("after", &log))
        .build()
        .unwrap();

    let report = logger.warning("disk check").unwrap();

    assert_eq!(report.delivered(), 1);
    assert_eq!(report.failures().count(), 1);
    assert_eq!(calls(&log), vec!["after:warning:disk check"]);
}

#[test]
fn concurrent_writes_through_one_destination_keep_every_line() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path());
    let path = file.current_file();
    let logger = Logger::builder()
        .all_severities()
        .destination(file)
        .build()
        .unwrap();

    std::thread::scope(|scope| {
        for t in 0..4 {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..10 {
                    logger.message(&format!("thread {t} line {i}")).unwrap();
                }
            });
        }
    });

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 40);
}

#[test]
fn custom_date_format_changes_prefix_and_file_name() {
    let tmp_dir = TempDir::new().unwrap();
    let file = FileDestination::in_directory(tmp_dir.path()).date_format("%Y-%m-%d");
    let path = file.current_file();

    file.emit("iso", Severity::Message).unwrap();

    let today = Local::now().format("%Y-%m-%d").to_string();
    assert!(path.to_string_lossy().ends_with(&format!("LogFile{today}.txt")));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with(&format!("{today} Message iso")));
}

#[test]
fn tilde_directory_expands_to_home() {
    let file = FileDestination::in_directory("~/joblog-logs");
    let home = std::env::var("HOME").unwrap();
    assert_eq!(
        file.directory_path(),
        std::path::Path::new(&home).join("joblog-logs")
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_directory_is_kept_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join(OsStr::from_bytes(b"logs-\xff"));
    let file = FileDestination::in_directory(&dir);
    assert_eq!(file.directory_path(), dir.as_path());

    file.emit("raw bytes", Severity::Message).unwrap();
    assert!(file.current_file().starts_with(&dir));
    assert!(file.current_file().exists());
}
