//! Timecard timestamp parsing and formatting.
//!
//! Timecards record punches as `MM/DD/YYYY hh:mm AM|PM` on a 12-hour clock
//! with no seconds. Parsing accepts values without zero padding; formatting
//! always re-emits the zero-padded form. Both functions take the format string
//! as a parameter and hold no state, so they are safe to call from anywhere.

use chrono::{NaiveDateTime, ParseError};

/// The timestamp format used by the "Time" and "Time Out" timecard columns.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Parses a timecard timestamp.
///
/// Leading and trailing whitespace is ignored. Anything else that deviates
/// from `format` (seconds, a missing AM/PM marker, trailing text) is an error.
///
/// # Examples
///
/// ```
/// use timecard_audit::timestamp::{parse_timestamp, TIMESTAMP_FORMAT};
/// use chrono::NaiveDate;
///
/// let parsed = parse_timestamp("1/5/2023 8:00 PM", TIMESTAMP_FORMAT).unwrap();
/// let expected = NaiveDate::from_ymd_opt(2023, 1, 5)
///     .unwrap()
///     .and_hms_opt(20, 0, 0)
///     .unwrap();
/// assert_eq!(parsed, expected);
///
/// assert!(parse_timestamp("2023-01-05 20:00", TIMESTAMP_FORMAT).is_err());
/// ```
pub fn parse_timestamp(value: &str, format: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), format)
}

/// Formats a timestamp in the fixed, zero-padded timecard form.
///
/// # Examples
///
/// ```
/// use timecard_audit::timestamp::{format_timestamp, TIMESTAMP_FORMAT};
/// use chrono::NaiveDate;
///
/// let datetime = NaiveDate::from_ymd_opt(2023, 1, 5)
///     .unwrap()
///     .and_hms_opt(8, 5, 0)
///     .unwrap();
/// assert_eq!(format_timestamp(datetime, TIMESTAMP_FORMAT), "01/05/2023 08:05 AM");
/// ```
pub fn format_timestamp(datetime: NaiveDateTime, format: &str) -> String {
    datetime.format(format).to_string()
}
