//! Presentation shared by destinations: console colors and date stamps.

mod color;
mod date;

pub use color::{Color, ColorGuard};
pub use date::{SHORT_DATE_FORMAT, file_date, short_date};
