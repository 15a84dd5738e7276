#![forbid(unsafe_code)]

//! `joblog` - initialize-once logger with console, file and database destinations.
//!
//! Every message carries one [`Severity`]. The logger only accepts the
//! severities it was configured with, trims the text, and hands it to each
//! destination in order. A destination that fails is reported through the
//! console (when one is configured) and never stops the others.
//!
//! # Example
//!
//! ```
//! use joblog::{ConsoleDestination, Logger, Severity};
//!
//! let (console, captured) = ConsoleDestination::capture();
//! let logger = Logger::builder()
//!     .severity(Severity::Message)
//!     .severity(Severity::Error)
//!     .destination(console.colors(false))
//!     .build()
//!     .unwrap();
//!
//! logger.message("Job started").unwrap();
//! assert!(logger.warning("disk almost full").is_err());
//! assert!(captured.plain().contains("Job started"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `joblog` command-line binary

pub mod config;
pub mod destination;
mod error;
pub mod fmt;
pub mod internal;
pub mod logger;
pub mod severity;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use destination::{
    CaptureBuffer, ConsoleDestination, DatabaseDestination, Destination, DestinationKind,
    FileDestination, create_destinations,
};
pub use error::Error;
pub use logger::cell::{global, initialize, initialize_with, instance, log};
pub use logger::{Delivery, DeliveryReport, Logger, LoggerBuilder, LoggerCell};
pub use severity::{ParseSeverityError, Severity};
