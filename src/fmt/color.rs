//! 24-bit ANSI colors and the guard that puts the terminal back the way it was.

use crate::severity::Severity;
use std::io::{self, Write};

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The raw `\x1b[38;2;R;G;Bm` escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    /// Display color for a console line of the given severity.
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::red(),
            Severity::Warning => Self::yellow(),
            Severity::Message => Self::white(),
        }
    }
}

/// Switches a writer to a color for as long as the guard lives.
///
/// The reset sequence is written on drop, so an error halfway through a line
/// still leaves the terminal in its neutral state.
pub struct ColorGuard<'a, W: Write + ?Sized> {
    writer: &'a mut W,
    active: bool,
}

impl<'a, W: Write + ?Sized> ColorGuard<'a, W> {
    /// `None` yields a pass-through guard that never touches the color state.
    ///
    /// # Errors
    /// Fails if the color escape itself cannot be written.
    pub fn set(writer: &'a mut W, color: Option<Color>) -> io::Result<Self> {
        let active = match color {
            Some(color) => {
                writer.write_all(color.fg_ansi().as_bytes())?;
                true
            }
            None => false,
        };
        Ok(Self { writer, active })
    }
}

impl<W: Write + ?Sized> Write for ColorGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + ?Sized> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.writer.write_all(Color::RESET.as_bytes());
        }
    }
}
