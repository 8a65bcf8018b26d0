//! Row-map form of a loaded timecard entry.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};
use crate::timestamp::{TIMESTAMP_FORMAT, parse_timestamp};

use super::{EmployeeKey, Shift, ShiftRecord};

/// Column holding the position identifier.
pub const POSITION_ID_FIELD: &str = "Position ID";
/// Column holding the employee name.
pub const EMPLOYEE_NAME_FIELD: &str = "Employee Name";
/// Column holding the clock-in timestamp.
pub const TIME_IN_FIELD: &str = "Time";
/// Column holding the clock-out timestamp.
pub const TIME_OUT_FIELD: &str = "Time Out";

/// Returns true when `field` holds a timestamp.
pub fn is_timestamp_field(field: &str) -> bool {
    field == TIME_IN_FIELD || field == TIME_OUT_FIELD
}

/// One data row of a timecard source, keyed by header name.
///
/// Timestamp fields that parsed are held in the zero-padded timecard format,
/// empty timestamp fields are held as `""`, and timestamp fields that failed
/// to parse are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardRow {
    /// The 1-based line of the source this row came from (the header is line 1).
    pub line: usize,
    /// Field values keyed by header name.
    pub fields: BTreeMap<String, String>,
}

impl TimecardRow {
    /// Creates a row from its line number and fields.
    pub fn new(line: usize, fields: BTreeMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Returns the raw value of `field`, if the row has one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the position identifier, treating a blank value as missing.
    pub fn position_id(&self) -> Option<&str> {
        self.non_blank(POSITION_ID_FIELD)
    }

    /// Returns the employee name, treating a blank value as missing.
    pub fn employee_name(&self) -> Option<&str> {
        self.non_blank(EMPLOYEE_NAME_FIELD)
    }

    /// Returns the parsed clock-in time, if present and valid.
    pub fn time_in(&self) -> Option<NaiveDateTime> {
        self.timestamp(TIME_IN_FIELD)
    }

    /// Returns the parsed clock-out time, if present and valid.
    pub fn time_out(&self) -> Option<NaiveDateTime> {
        self.timestamp(TIME_OUT_FIELD)
    }

    /// Converts the row into a [`ShiftRecord`].
    ///
    /// Returns `Ok(None)` when the row lacks a position, an employee name, or
    /// either timestamp. Returns [`AuditError::InvalidShift`] when both
    /// timestamps are present but the shift does not end after it starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use timecard_audit::models::TimecardRow;
    ///
    /// let fields = BTreeMap::from([
    ///     ("Position ID".to_string(), "P-100".to_string()),
    ///     ("Employee Name".to_string(), "Jane Doe".to_string()),
    ///     ("Time".to_string(), "01/15/2023 08:00 AM".to_string()),
    ///     ("Time Out".to_string(), "01/15/2023 04:00 PM".to_string()),
    /// ]);
    /// let row = TimecardRow::new(2, fields);
    ///
    /// let record = row.to_shift_record().unwrap().unwrap();
    /// assert_eq!(record.employee_name, "Jane Doe");
    /// assert_eq!(record.duration().num_hours(), 8);
    /// ```
    pub fn to_shift_record(&self) -> AuditResult<Option<ShiftRecord>> {
        let (Some(position_id), Some(employee_name), Some(time_in), Some(time_out)) = (
            self.position_id(),
            self.employee_name(),
            self.time_in(),
            self.time_out(),
        ) else {
            return Ok(None);
        };

        ShiftRecord::new(position_id, employee_name, time_in, time_out)
            .map(Some)
            .map_err(|err| match err {
                AuditError::InvalidShift { message, .. } => AuditError::InvalidShift {
                    line: self.line,
                    message,
                },
                other => other,
            })
    }

    /// Returns the grouping key and clock-in/clock-out pair of the row.
    ///
    /// Returns `None` when the row lacks a position, an employee name or
    /// either timestamp. Unlike [`TimecardRow::to_shift_record`], the pair is
    /// returned as punched even when it does not end after it starts.
    pub fn employee_shift(&self) -> Option<(EmployeeKey, Shift)> {
        let key = EmployeeKey::new(self.position_id()?, self.employee_name()?);
        let shift = Shift {
            time_in: self.time_in()?,
            time_out: self.time_out()?,
        };
        Some((key, shift))
    }

    fn non_blank(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    fn timestamp(&self, field: &str) -> Option<NaiveDateTime> {
        self.non_blank(field)
            .and_then(|value| parse_timestamp(value, TIMESTAMP_FORMAT).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(line: usize, pairs: &[(&str, &str)]) -> TimecardRow {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TimecardRow::new(line, fields)
    }

    fn complete_row() -> TimecardRow {
        make_row(
            2,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 08:00 AM"),
                (TIME_OUT_FIELD, "01/15/2023 04:00 PM"),
            ],
        )
    }

    #[test]
    fn test_is_timestamp_field() {
        assert!(is_timestamp_field("Time"));
        assert!(is_timestamp_field("Time Out"));
        assert!(!is_timestamp_field("Position ID"));
        assert!(!is_timestamp_field("time"));
    }

    #[test]
    fn test_complete_row_converts_to_shift_record() {
        let record = complete_row().to_shift_record().unwrap().unwrap();
        assert_eq!(record.position_id, "P-100");
        assert_eq!(record.employee_name, "Jane Doe");
        assert_eq!(record.duration(), chrono::Duration::hours(8));
    }

    #[test]
    fn test_missing_time_out_yields_none() {
        let row = make_row(
            3,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 08:00 AM"),
            ],
        );
        assert!(row.to_shift_record().unwrap().is_none());
    }

    #[test]
    fn test_empty_timestamp_yields_none() {
        let row = make_row(
            3,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, ""),
                (TIME_OUT_FIELD, "01/15/2023 04:00 PM"),
            ],
        );
        assert_eq!(row.time_in(), None);
        assert!(row.to_shift_record().unwrap().is_none());
    }

    #[test]
    fn test_blank_employee_name_yields_none() {
        let row = make_row(
            3,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "   "),
                (TIME_IN_FIELD, "01/15/2023 08:00 AM"),
                (TIME_OUT_FIELD, "01/15/2023 04:00 PM"),
            ],
        );
        assert_eq!(row.employee_name(), None);
        assert!(row.to_shift_record().unwrap().is_none());
    }

    #[test]
    fn test_missing_position_yields_none() {
        let row = make_row(
            3,
            &[
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 08:00 AM"),
                (TIME_OUT_FIELD, "01/15/2023 04:00 PM"),
            ],
        );
        assert!(row.to_shift_record().unwrap().is_none());
    }

    #[test]
    fn test_reversed_shift_reports_row_line() {
        let row = make_row(
            7,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 04:00 PM"),
                (TIME_OUT_FIELD, "01/15/2023 08:00 AM"),
            ],
        );

        match row.to_shift_record() {
            Err(AuditError::InvalidShift { line, .. }) => assert_eq!(line, 7),
            other => panic!("Expected InvalidShift error, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_shift_keeps_punch_order() {
        let row = make_row(
            7,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 04:00 PM"),
                (TIME_OUT_FIELD, "01/15/2023 08:00 AM"),
            ],
        );

        let (key, shift) = row.employee_shift().unwrap();
        assert_eq!(key, EmployeeKey::new("P-100", "Jane Doe"));
        assert!(shift.time_out < shift.time_in);
    }

    #[test]
    fn test_employee_shift_requires_both_timestamps() {
        let row = make_row(
            3,
            &[
                (POSITION_ID_FIELD, "P-100"),
                (EMPLOYEE_NAME_FIELD, "Jane Doe"),
                (TIME_IN_FIELD, "01/15/2023 08:00 AM"),
            ],
        );
        assert!(row.employee_shift().is_none());
    }

    #[test]
    fn test_get_returns_extra_columns() {
        let row = make_row(2, &[("Pay Cycle Start Date", "01/09/2023")]);
        assert_eq!(row.get("Pay Cycle Start Date"), Some("01/09/2023"));
        assert_eq!(row.get("Missing"), None);
    }
}
