//! Pick the earliest or latest event by a timestamp field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IcsError, IcsResult};
use crate::event::{CalEvent, TimestampField};

/// Direction of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extreme {
    #[default]
    Min,
    Max,
}

impl Extreme {
    /// Whether `candidate` should replace the current best.
    /// Ties keep the current best.
    fn beats<T: Ord>(&self, candidate: &T, best: &T) -> bool {
        match self {
            Extreme::Min => candidate < best,
            Extreme::Max => candidate > best,
        }
    }
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extreme::Min => f.write_str("min"),
            Extreme::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Extreme {
    type Err = IcsError;

    fn from_str(s: &str) -> IcsResult<Self> {
        match s {
            "min" => Ok(Extreme::Min),
            "max" => Ok(Extreme::Max),
            other => Err(IcsError::UnknownExtreme(other.to_string())),
        }
    }
}

/// Return the event whose `field` is the smallest (or largest) value.
///
/// Events without a value for `field` are skipped. On a tie the first event in
/// input order wins. Returns `None` when no event has the field.
pub fn select_extreme(events: &[CalEvent], field: TimestampField, extreme: Extreme) -> Option<&CalEvent> {
    let mut best: Option<(&CalEvent, chrono::NaiveDateTime)> = None;

    for event in events {
        let Some(value) = event.timestamp(field) else {
            continue;
        };

        match best {
            Some((_, best_value)) if !extreme.beats(&value, &best_value) => {}
            _ => best = Some((event, value)),
        }
    }

    best.map(|(event, _)| event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn starting(summary: &str, start: NaiveDateTime) -> CalEvent {
        CalEvent {
            start: Some(start),
            summary: Some(summary.to_string()),
            ..CalEvent::new()
        }
    }

    fn summary_of(event: Option<&CalEvent>) -> Option<&str> {
        event.and_then(|e| e.summary.as_deref())
    }

    #[test]
    fn test_min_by_start() {
        let events = vec![
            starting("March", day(2024, 3, 1)),
            starting("Christmas", day(2023, 12, 25)),
            starting("June", day(2024, 6, 10)),
        ];

        let earliest = select_extreme(&events, TimestampField::Start, Extreme::Min);
        assert_eq!(summary_of(earliest), Some("Christmas"));
    }

    #[test]
    fn test_max_by_start() {
        let events = vec![
            starting("March", day(2024, 3, 1)),
            starting("Christmas", day(2023, 12, 25)),
            starting("June", day(2024, 6, 10)),
        ];

        let latest = select_extreme(&events, TimestampField::Start, Extreme::Max);
        assert_eq!(summary_of(latest), Some("June"));
    }

    #[test]
    fn test_empty_collection_has_no_result() {
        assert_eq!(select_extreme(&[], TimestampField::Start, Extreme::Min), None);
    }

    #[test]
    fn test_ties_keep_first_in_input_order() {
        let events = vec![
            starting("first", day(2024, 1, 1)),
            starting("second", day(2024, 1, 1)),
        ];

        for extreme in [Extreme::Min, Extreme::Max] {
            let picked = select_extreme(&events, TimestampField::Start, extreme);
            assert_eq!(summary_of(picked), Some("first"), "{extreme}");
        }
    }

    #[test]
    fn test_events_without_field_are_skipped() {
        let mut untimed = CalEvent::new();
        untimed.summary = Some("untimed".to_string());
        let events = vec![untimed, starting("timed", day(2024, 5, 5))];

        let earliest = select_extreme(&events, TimestampField::Start, Extreme::Min);
        assert_eq!(summary_of(earliest), Some("timed"));
    }

    #[test]
    fn test_no_event_has_field() {
        let events = vec![starting("a", day(2024, 1, 1)), starting("b", day(2024, 1, 2))];
        assert_eq!(select_extreme(&events, TimestampField::Created, Extreme::Min), None);
    }

    #[test]
    fn test_select_by_end() {
        let early_end = CalEvent::scheduled(day(2024, 1, 5), day(2024, 1, 6), "short");
        let late_end = CalEvent::scheduled(day(2024, 1, 1), day(2024, 1, 10), "long");
        let events = vec![late_end, early_end];

        let picked = select_extreme(&events, TimestampField::End, Extreme::Min);
        assert_eq!(summary_of(picked), Some("short"));
    }

    #[test]
    fn test_extreme_from_str() {
        assert_eq!("min".parse::<Extreme>(), Ok(Extreme::Min));
        assert_eq!("max".parse::<Extreme>(), Ok(Extreme::Max));
        assert_eq!(
            "earliest".parse::<Extreme>(),
            Err(IcsError::UnknownExtreme("earliest".to_string()))
        );
    }
}
