//! Subcommand handlers.

mod destinations;
mod log;

pub use destinations::cmd_destinations;
pub use log::cmd_log;
