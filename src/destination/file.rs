//! Daily text files: `LogFile{date}.txt`, one `{date} {label} {message}` line per call.
//!
//! Each call reads the whole file, appends in memory and rewrites it, so the
//! cost grows with the day's file. Calls through one `FileDestination` are
//! serialized; separate processes writing the same file can still lose lines.

use super::{Destination, DestinationKind, prepare};
use crate::fmt::{SHORT_DATE_FORMAT, file_date, short_date};
use crate::internal;
use crate::severity::Severity;

use chrono::{DateTime, Local};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct FileDestination {
    directory: PathBuf,
    date_format: String,
    /// Guards the read-modify-write cycle against other threads using this destination.
    write_lock: Mutex<()>,
}

impl Default for FileDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl FileDestination {
    /// Writes into the process's current working directory.
    #[must_use]
    pub fn new() -> Self {
        let directory = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            directory,
            date_format: SHORT_DATE_FORMAT.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Writes into `dir`; a leading `~` is expanded. The directory is created on first write.
    #[must_use]
    pub fn in_directory(dir: impl AsRef<Path>) -> Self {
        Self::new().directory(dir)
    }

    #[must_use]
    pub fn directory(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        // non-UTF-8 paths are kept byte for byte
        self.directory = dir.to_str().map_or_else(
            || dir.to_path_buf(),
            |raw| PathBuf::from(shellexpand::tilde(raw).as_ref()),
        );
        self
    }

    /// strftime pattern for the line prefix and the file name (slashes become dots).
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn directory_path(&self) -> &Path {
        &self.directory
    }

    /// Path of the file a call made right now would write to.
    #[must_use]
    pub fn current_file(&self) -> PathBuf {
        self.file_for(&Local::now())
    }

    fn file_for(&self, now: &DateTime<Local>) -> PathBuf {
        self.directory
            .join(format!("LogFile{}.txt", file_date(now, &self.date_format)))
    }

    fn format_line(&self, now: &DateTime<Local>, text: &str, severity: Severity) -> String {
        format!(
            "{} {} {}\n",
            short_date(now, &self.date_format),
            severity.label(),
            text
        )
    }

    fn ensure_directory(&self) -> Result<(), crate::Error> {
        if self.directory.exists() {
            return Ok(());
        }
        match fs::create_dir_all(&self.directory) {
            Ok(()) => {
                internal::debug(
                    "FILE",
                    &format!("Created directory: {}", self.directory.display()),
                );
                Ok(())
            }
            Err(e) => {
                internal::error(
                    "FILE",
                    &format!(
                        "Failed to create directory {}: {}",
                        self.directory.display(),
                        e
                    ),
                );
                Err(e.into())
            }
        }
    }
}

impl Destination for FileDestination {
    fn emit(&self, text: &str, severity: Severity) -> Result<(), crate::Error> {
        let Some(text) = prepare(text) else {
            return Ok(());
        };

        let now = Local::now();
        let path = self.file_for(&now);
        let line = self.format_line(&now, text, severity);

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ensure_directory()?;

        let mut content = match fs::read_to_string(&path) {
            Ok(existing) => existing,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        content.push_str(&line);
        fs::write(&path, content)?;

        Ok(())
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::File
    }
}
