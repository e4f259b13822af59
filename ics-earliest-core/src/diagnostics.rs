//! Side channel for recoverable decode failures.
//!
//! The decoder never fails on a bad date. It leaves the field absent and hands
//! a [`DateDiagnostic`] to whatever [`Diagnostics`] sink the caller passed in.

use std::fmt;

use crate::error::DateParseError;

/// One date token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDiagnostic {
    /// 1-based line number in the input
    pub line: usize,
    /// Field name as written, e.g. `DTSTART;VALUE=DATE`
    pub field: String,
    pub error: DateParseError,
}

impl fmt::Display for DateDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.field, self.error)
    }
}

/// Receiver for decode diagnostics.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: DateDiagnostic);
}

/// Collects diagnostics in memory.
impl Diagnostics for Vec<DateDiagnostic> {
    fn report(&mut self, diagnostic: DateDiagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: DateDiagnostic) {
        tracing::warn!(
            line = diagnostic.line,
            field = %diagnostic.field,
            "Invalid datetime input, could not convert to a timestamp: {}",
            diagnostic.error
        );
    }
}
