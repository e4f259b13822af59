//! Event record decoded from a single VEVENT block.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{IcsError, IcsResult};

/// A calendar event as found in the export.
///
/// Every field is optional: a block without DTSTART is still an event, it just
/// has no start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalEvent {
    /// DTSTART
    pub start: Option<NaiveDateTime>,
    /// DTEND
    pub end: Option<NaiveDateTime>,
    /// CREATED
    pub created: Option<NaiveDateTime>,
    /// SUMMARY
    pub summary: Option<String>,
    /// UID
    pub uid: Option<String>,
}

impl CalEvent {
    /// An event with every field absent.
    pub fn new() -> Self {
        CalEvent {
            start: None,
            end: None,
            created: None,
            summary: None,
            uid: None,
        }
    }

    /// An event with start, end and summary set.
    pub fn scheduled(start: NaiveDateTime, end: NaiveDateTime, summary: impl Into<String>) -> Self {
        CalEvent {
            start: Some(start),
            end: Some(end),
            summary: Some(summary.into()),
            ..Self::new()
        }
    }

    /// Read one of the timestamp fields.
    pub fn timestamp(&self, field: TimestampField) -> Option<NaiveDateTime> {
        match field {
            TimestampField::Start => self.start,
            TimestampField::End => self.end,
            TimestampField::Created => self.created,
        }
    }
}

/// The timestamp fields an event can be compared by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampField {
    #[default]
    Start,
    End,
    Created,
}

impl TimestampField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampField::Start => "start",
            TimestampField::End => "end",
            TimestampField::Created => "created",
        }
    }
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampField {
    type Err = IcsError;

    fn from_str(s: &str) -> IcsResult<Self> {
        match s {
            "start" => Ok(TimestampField::Start),
            "end" => Ok(TimestampField::End),
            "created" => Ok(TimestampField::Created),
            other => Err(IcsError::UnknownField(other.to_string())),
        }
    }
}
