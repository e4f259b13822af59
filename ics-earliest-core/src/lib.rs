//! Core types for ics-earliest.
//!
//! This crate turns the lines of an .ics export into event records and picks
//! one of them by a timestamp field:
//! - `ics` module for locating VEVENT blocks and decoding their fields
//! - `select` module for min/max selection over a timestamp field
//! - `diagnostics` module for reporting dates that could not be parsed
//!
//! Nothing here touches the filesystem or the terminal.

pub mod calendar;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod ics;
pub mod select;

pub use calendar::Calendar;
pub use diagnostics::{DateDiagnostic, Diagnostics, LogDiagnostics};
pub use error::{DateParseError, IcsError, IcsResult};
pub use event::{CalEvent, TimestampField};
pub use ics::{BlockRange, DateFormat, decode_event, locate_blocks, parse_date, parse_events};
pub use select::{Extreme, select_extreme};
