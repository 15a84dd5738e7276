//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use joblog::{Destination, Error, Severity};
use std::io;
use std::sync::{Arc, Mutex};

/// Shared call log; every recorder writes `name:severity:text` into it.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct Recorder {
    name: &'static str,
    calls: CallLog,
}

impl Recorder {
    pub fn new(name: &'static str, calls: &CallLog) -> Self {
        Self {
            name,
            calls: Arc::clone(calls),
        }
    }
}

impl Destination for Recorder {
    fn emit(&self, text: &str, severity: Severity) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}:{}", self.name, severity, text));
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Always fails with an I/O error, after noting that it was called.
pub struct Broken {
    calls: CallLog,
}

impl Broken {
    pub fn new(calls: &CallLog) -> Self {
        Self {
            calls: Arc::clone(calls),
        }
    }
}

impl Destination for Broken {
    fn emit(&self, _text: &str, _severity: Severity) -> Result<(), Error> {
        self.calls.lock().unwrap().push("broken".to_string());
        Err(Error::Io(io::Error::other("disk on fire")))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
