//! Console destination: `{short-date}{message}` on stdout, colored by severity.
//!
//! There is deliberately no space between the date and the message; existing
//! consumers of this output match on that exact shape.

use super::{Destination, DestinationKind, prepare};
use crate::fmt::{Color, ColorGuard, SHORT_DATE_FORMAT, short_date};
use crate::severity::Severity;

use chrono::Local;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared in-memory sink, so tests and embedding applications can read what the console would have shown.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    /// Everything written so far, ANSI escapes included.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Captured text with color escapes removed.
    #[must_use]
    pub fn plain(&self) -> String {
        let mut out = String::new();
        let contents = self.contents();
        let mut chars = contents.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Capture(CaptureBuffer),
}

#[derive(Debug, Clone)]
pub struct ConsoleDestination {
    /// Piped output and CI logs can't render ANSI escape codes.
    colors_enabled: bool,
    date_format: String,
    sink: Sink,
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDestination {
    /// Colored output to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            date_format: SHORT_DATE_FORMAT.to_string(),
            sink: Sink::Stdout,
        }
    }

    /// Writes into a fresh in-memory buffer instead of stdout.
    #[must_use]
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        let destination = Self {
            sink: Sink::Capture(buffer.clone()),
            ..Self::new()
        };
        (destination, buffer)
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// strftime pattern for the line prefix.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    fn format_line(&self, text: &str) -> String {
        format!("{}{}", short_date(&Local::now(), &self.date_format), text)
    }

    fn write_line<W: Write + ?Sized>(
        writer: &mut W,
        color: Option<Color>,
        line: &str,
    ) -> io::Result<()> {
        {
            let mut guard = ColorGuard::set(&mut *writer, color)?;
            guard.write_all(line.as_bytes())?;
        }
        // reset goes before the terminator
        writer.write_all(b"\n")
    }
}

impl Destination for ConsoleDestination {
    fn emit(&self, text: &str, severity: Severity) -> Result<(), crate::Error> {
        let Some(text) = prepare(text) else {
            return Ok(());
        };

        let line = self.format_line(text);
        let color = self
            .colors_enabled
            .then(|| Color::for_severity(severity));

        match &self.sink {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                Self::write_line(&mut stdout, color, &line)?;
                stdout.flush()?;
            }
            Sink::Capture(buffer) => {
                let mut bytes = buffer.0.lock().unwrap_or_else(PoisonError::into_inner);
                Self::write_line(&mut *bytes, color, &line)?;
            }
        }

        Ok(())
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Console
    }
}
