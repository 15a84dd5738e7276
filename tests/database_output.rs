use joblog::{DatabaseDestination, Destination, Error, Logger, Severity};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("log.db").display())
}

fn read_rows(url: &str) -> Vec<(String, i32)> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        let mut conn = SqliteConnection::connect(url).await.unwrap();
        let rows = sqlx::query_as("SELECT message, type FROM Log ORDER BY rowid")
            .fetch_all(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
        rows
    })
}

#[test]
fn blank_connection_string_fails_fast() {
    for blank in ["", "   ", "\n"] {
        let err = DatabaseDestination::new(blank).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}

#[test]
fn inserts_one_row_per_call() {
    let tmp_dir = TempDir::new().unwrap();
    let url = sqlite_url(&tmp_dir);
    let database = DatabaseDestination::new(&url).unwrap();

    database.emit("first", Severity::Message).unwrap();
    database.emit("second", Severity::Error).unwrap();

    assert_eq!(
        read_rows(&url),
        vec![("first".to_string(), 0), ("second".to_string(), 2)]
    );
}

#[test]
fn blank_input_inserts_nothing() {
    let tmp_dir = TempDir::new().unwrap();
    let url = sqlite_url(&tmp_dir);
    let database = DatabaseDestination::new(&url).unwrap();

    database.emit("  ", Severity::Message).unwrap();

    assert!(!tmp_dir.path().join("log.db").exists());
}

#[test]
fn connection_failure_is_returned() {
    let tmp_dir = TempDir::new().unwrap();
    let url = format!(
        "sqlite://{}",
        tmp_dir.path().join("missing").join("log.db").display()
    );
    let database = DatabaseDestination::new(url).unwrap();

    let err = database.emit("lost", Severity::Warning).unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}

#[test]
fn works_from_inside_an_async_context() {
    let tmp_dir = TempDir::new().unwrap();
    let url = sqlite_url(&tmp_dir);
    let database = DatabaseDestination::new(&url).unwrap();

    let outer = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    outer
        .block_on(async { database.emit("nested", Severity::Warning) })
        .unwrap();

    assert_eq!(read_rows(&url), vec![("nested".to_string(), 1)]);
}

#[test]
fn can_be_dropped_inside_an_async_context() {
    let tmp_dir = TempDir::new().unwrap();
    let url = sqlite_url(&tmp_dir);

    let outer = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    outer.block_on(async {
        let logger = Logger::builder()
            .all_severities()
            .destination(DatabaseDestination::new(&url).unwrap())
            .build()
            .unwrap();
        logger.message("inside").unwrap();
        drop(logger);

        // destination created and dropped without ever being used
        drop(DatabaseDestination::new(&url).unwrap());
    });

    assert_eq!(read_rows(&url), vec![("inside".to_string(), 0)]);
}

#[test]
fn database_failure_is_isolated_by_the_logger() {
    let tmp_dir = TempDir::new().unwrap();
    let bad_url = format!(
        "sqlite://{}",
        tmp_dir.path().join("nope").join("log.db").display()
    );
    let good_url = sqlite_url(&tmp_dir);

    let logger = Logger::builder()
        .all_severities()
        .destination(DatabaseDestination::new(bad_url).unwrap())
        .destination(DatabaseDestination::new(&good_url).unwrap())
        .build()
        .unwrap();

    let report = logger.message("survivor").unwrap();

    assert_eq!(report.delivered(), 1);
    assert_eq!(read_rows(&good_url), vec![("survivor".to_string(), 0)]);
}
