//! Database destination: one row per call in the `Log` table of a SQLite database.
//!
//! Every call opens its own connection and closes it afterwards; nothing is
//! pooled or batched. Failures are reported on stderr and then returned, so
//! the logger can isolate them from the other destinations.

use super::{Destination, DestinationKind, prepare};
use crate::internal;
use crate::severity::Severity;

use chrono::Local;
use sqlx::{Connection, SqliteConnection};
use std::future::Future;
use tokio::runtime::{Builder, Handle, Runtime};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS Log (\
     message TEXT NOT NULL, \
     type INTEGER NOT NULL, \
     date DATETIME NOT NULL)";

const INSERT: &str = "INSERT INTO Log (message, type, date) VALUES (?, ?, ?)";

#[derive(Debug)]
pub struct DatabaseDestination {
    /// sqlx SQLite URL, e.g. `sqlite://logs.db?mode=rwc`.
    connection_string: String,
    /// `emit` is synchronous; this drives the sqlx futures to completion.
    /// Only taken in `Drop`.
    runtime: Option<Runtime>,
}

impl DatabaseDestination {
    /// # Errors
    /// `InvalidArgument` for an empty or whitespace-only connection string,
    /// `Io` if the runtime backing the connection cannot start.
    pub fn new(connection_string: impl Into<String>) -> Result<Self, crate::Error> {
        let connection_string = connection_string.into();
        if connection_string.trim().is_empty() {
            return Err(crate::Error::InvalidArgument(
                "connection string cannot be empty".to_string(),
            ));
        }

        let runtime = Builder::new_current_thread().enable_all().build()?;

        Ok(Self {
            connection_string,
            runtime: Some(runtime),
        })
    }

    #[must_use]
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// `block_on` panics inside another runtime's context, so callers that are
    /// already async get the insert run on a scoped helper thread instead.
    fn run<F>(&self, fut: F) -> Result<(), crate::Error>
    where
        F: Future<Output = Result<(), crate::Error>> + Send,
    {
        let runtime = self.runtime.as_ref().ok_or_else(|| {
            crate::Error::Runtime("database runtime already shut down".to_string())
        })?;

        if Handle::try_current().is_err() {
            return runtime.block_on(fut);
        }

        std::thread::scope(|scope| {
            scope
                .spawn(move || runtime.block_on(fut))
                .join()
                .map_err(|_| crate::Error::Runtime("database worker panicked".to_string()))?
        })
    }
}

impl Drop for DatabaseDestination {
    /// A plain runtime drop panics when it happens inside another runtime's context.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

async fn insert(connection_string: &str, text: &str, severity: Severity) -> Result<(), crate::Error> {
    let mut conn = SqliteConnection::connect(connection_string).await?;

    sqlx::query(CREATE_TABLE).execute(&mut conn).await?;
    sqlx::query(INSERT)
        .bind(text)
        .bind(severity.code())
        .bind(Local::now().naive_local())
        .execute(&mut conn)
        .await?;

    conn.close().await?;
    Ok(())
}

impl Destination for DatabaseDestination {
    fn emit(&self, text: &str, severity: Severity) -> Result<(), crate::Error> {
        let Some(text) = prepare(text) else {
            return Ok(());
        };

        let result = self.run(insert(&self.connection_string, text, severity));
        if let Err(e) = &result {
            internal::error("DATABASE", &format!("Failed to log to database: {e}"));
        }
        result
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Database
    }
}
