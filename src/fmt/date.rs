//! Short dates for line prefixes and daily file names.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// US short date (`10/18/2026`), the prefix of every console and file line.
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Renders `now` with a strftime pattern.
#[must_use]
pub fn short_date<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(format).to_string()
}

/// Short date with path separators swapped for dots, safe to embed in a file name.
#[must_use]
pub fn file_date<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    short_date(now, format).replace(['/', '\\'], ".")
}
