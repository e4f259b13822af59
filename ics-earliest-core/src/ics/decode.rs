//! Field decoding for a located VEVENT block.

use crate::diagnostics::{DateDiagnostic, Diagnostics};
use crate::event::CalEvent;
use crate::ics::blocks::{BlockRange, locate_blocks};
use crate::ics::date::{DateFormat, parse_date};
use crate::ics::trim_line_ending;

/// Decode every VEVENT block in `lines`.
pub fn parse_events<S: AsRef<str>>(lines: &[S], diagnostics: &mut dyn Diagnostics) -> Vec<CalEvent> {
    locate_blocks(lines)
        .into_iter()
        .map(|range| decode_event(lines, range, diagnostics))
        .collect()
}

/// Decode the lines of one block into an event.
///
/// Each line is split at its first colon into name and value. Later lines
/// overwrite earlier ones for the same field. A date that fails to parse
/// leaves its field absent and is reported to `diagnostics`.
pub fn decode_event<S: AsRef<str>>(
    lines: &[S],
    range: BlockRange,
    diagnostics: &mut dyn Diagnostics,
) -> CalEvent {
    let mut event = CalEvent::new();

    let block = lines
        .iter()
        .enumerate()
        .take(range.end.saturating_add(1))
        .skip(range.start);

    for (index, line) in block {
        let Some((name, value)) = line.as_ref().split_once(':') else {
            continue;
        };

        let mut date = |format| decode_date(index, name, value, format, diagnostics);

        if name.contains("DTSTART") {
            match date_format(name, "DTSTART") {
                Some(format) => event.start = date(format),
                None => tracing::debug!(line = index + 1, name, "Unsupported DTSTART form skipped"),
            }
        } else if name.contains("DTEND") {
            match date_format(name, "DTEND") {
                Some(format) => event.end = date(format),
                None => tracing::debug!(line = index + 1, name, "Unsupported DTEND form skipped"),
            }
        } else {
            match name {
                "CREATED" => event.created = date(DateFormat::DateTime),
                "SUMMARY" => event.summary = Some(trim_line_ending(value).to_string()),
                "UID" => event.uid = Some(trim_line_ending(value).to_string()),
                _ => {}
            }
        }
    }

    event
}

/// `DTSTART` is a date-time, `DTSTART;VALUE=DATE` a date. Other parameter
/// forms are not decoded.
fn date_format(name: &str, property: &str) -> Option<DateFormat> {
    match name.strip_prefix(property)? {
        "" => Some(DateFormat::DateTime),
        ";VALUE=DATE" => Some(DateFormat::Date),
        _ => None,
    }
}

fn decode_date(
    index: usize,
    name: &str,
    value: &str,
    format: DateFormat,
    diagnostics: &mut dyn Diagnostics,
) -> Option<chrono::NaiveDateTime> {
    match parse_date(value, format) {
        Ok(timestamp) => Some(timestamp),
        Err(error) => {
            diagnostics.report(DateDiagnostic {
                line: index + 1,
                field: name.to_string(),
                error,
            });
            None
        }
    }
}
