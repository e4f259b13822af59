//! Error types for ics-earliest.

use thiserror::Error;

use crate::ics::DateFormat;

/// Errors from the fixed-layout date parser.
///
/// These never escape the event decoder: a failed date leaves its field absent
/// and is reported through the diagnostic channel instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("'{token}' is too short for a {format} value")]
    TooShort { token: String, format: DateFormat },

    #[error("{component} in '{token}' is not a number")]
    NotANumber {
        token: String,
        component: &'static str,
    },

    #[error("'{token}' is not a valid calendar date/time")]
    OutOfRange { token: String },
}

/// Errors caused by how the core is called, not by the calendar data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IcsError {
    #[error("extreme must be either \"min\" or \"max\", got '{0}'")]
    UnknownExtreme(String),

    #[error("unknown timestamp field '{0}' (expected start, end or created)")]
    UnknownField(String),
}

/// Result type alias for ics-earliest operations.
pub type IcsResult<T> = Result<T, IcsError>;
