//! Line-based .ics reading.
//!
//! Only the subset needed to find events and their timestamps: no line
//! unfolding, no escaping, no TZID handling.

mod blocks;
mod date;
mod decode;

pub use blocks::{BlockRange, locate_blocks};
pub use date::{DateFormat, parse_date};
pub use decode::{decode_event, parse_events};

/// Strip the line terminator left on a line read with its ending.
pub(crate) fn trim_line_ending(value: &str) -> &str {
    value.trim_end_matches(['\n', '\r'])
}
