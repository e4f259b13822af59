//! Fixed-layout DATE and DATE-TIME values.
//!
//! ```text
//! YYYYMMDDTHHmmssZ
//! 0123456789012345
//! ```
//!
//! Position 8 is the `T` separator and position 15 the UTC marker; neither is
//! checked. Anything after the seconds is ignored.

use std::fmt;
use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DateParseError;

/// Which layout a value is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYYMMDDTHHmmss[Z]`
    DateTime,
    /// `YYYYMMDD`, midnight
    Date,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::DateTime => f.write_str("date-time"),
            DateFormat::Date => f.write_str("date"),
        }
    }
}

const YEAR: Range<usize> = 0..4;
const MONTH: Range<usize> = 4..6;
const DAY: Range<usize> = 6..8;
const HOUR: Range<usize> = 9..11;
const MINUTE: Range<usize> = 11..13;
const SECOND: Range<usize> = 13..15;

/// Parse `token` as a timestamp in the given layout.
pub fn parse_date(token: &str, format: DateFormat) -> Result<NaiveDateTime, DateParseError> {
    let read = |range: Range<usize>, component: &'static str| {
        read_component(token, range, component, format)
    };

    let year = read(YEAR, "year")?;
    let month = read(MONTH, "month")?;
    let day = read(DAY, "day")?;

    let (hour, minute, second) = match format {
        DateFormat::Date => (0, 0, 0),
        DateFormat::DateTime => (
            read(HOUR, "hour")?,
            read(MINUTE, "minute")?,
            read(SECOND, "second")?,
        ),
    };

    // Year 0 is not a calendar year here, even though chrono accepts it.
    if year == 0 {
        return Err(DateParseError::OutOfRange {
            token: token.to_string(),
        });
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| DateParseError::OutOfRange {
            token: token.to_string(),
        })
}

fn read_component(
    token: &str,
    range: Range<usize>,
    component: &'static str,
    format: DateFormat,
) -> Result<u32, DateParseError> {
    if token.len() < range.end {
        return Err(DateParseError::TooShort {
            token: token.to_string(),
            format,
        });
    }

    let not_a_number = || DateParseError::NotANumber {
        token: token.to_string(),
        component,
    };

    let digits = token.get(range).ok_or_else(not_a_number)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    digits.parse().map_err(|_| not_a_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_utc_datetime() {
        assert_eq!(
            parse_date("20240115T090000Z", DateFormat::DateTime),
            Ok(ymd_hms(2024, 1, 15, 9, 0, 0))
        );
    }

    #[test]
    fn test_parse_floating_datetime_with_line_ending() {
        assert_eq!(
            parse_date("20231231T235959\r\n", DateFormat::DateTime),
            Ok(ymd_hms(2023, 12, 31, 23, 59, 59))
        );
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(
            parse_date("20240115", DateFormat::Date),
            Ok(ymd_hms(2024, 1, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_date_only_ignores_time_digits() {
        assert_eq!(
            parse_date("20240115T093000Z", DateFormat::Date),
            Ok(ymd_hms(2024, 1, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_non_numeric_month() {
        assert_eq!(
            parse_date("2024XX15T090000Z", DateFormat::DateTime),
            Err(DateParseError::NotANumber {
                token: "2024XX15T090000Z".to_string(),
                component: "month",
            })
        );
    }

    #[test]
    fn test_signed_component_is_not_a_number() {
        assert!(matches!(
            parse_date("2024+115", DateFormat::Date),
            Err(DateParseError::NotANumber { component: "month", .. })
        ));
    }

    #[test]
    fn test_date_value_in_datetime_field_is_too_short() {
        assert_eq!(
            parse_date("20240115", DateFormat::DateTime),
            Err(DateParseError::TooShort {
                token: "20240115".to_string(),
                format: DateFormat::DateTime,
            })
        );
    }

    #[test]
    fn test_invalid_calendar_values() {
        for token in [
            "00000101T000000Z",
            "20241301T000000Z",
            "20240132T000000Z",
            "20230229T000000Z",
            "20240101T250000Z",
            "20240101T106000Z",
        ] {
            assert_eq!(
                parse_date(token, DateFormat::DateTime),
                Err(DateParseError::OutOfRange {
                    token: token.to_string()
                }),
                "{token} should be out of range"
            );
        }
    }

    #[test]
    fn test_year_zero_date_only() {
        assert!(matches!(
            parse_date("00000101", DateFormat::Date),
            Err(DateParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            parse_date("20240229", DateFormat::Date),
            Ok(ymd_hms(2024, 2, 29, 0, 0, 0))
        );
    }

    #[test]
    fn test_empty_token() {
        assert!(matches!(
            parse_date("", DateFormat::Date),
            Err(DateParseError::TooShort { .. })
        ));
    }
}
