//! Shift models.
//!
//! This module defines [`Shift`], a single clock-in/clock-out pair, and
//! [`ShiftRecord`], a shift attributed to an employee in a position.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

/// One interval worked by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// When the employee clocked in.
    pub time_in: NaiveDateTime,
    /// When the employee clocked out.
    pub time_out: NaiveDateTime,
}

impl Shift {
    /// Returns the elapsed time between clocking in and clocking out.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_audit::models::Shift;
    /// use chrono::{Duration, NaiveDateTime};
    ///
    /// let shift = Shift {
    ///     time_in: NaiveDateTime::parse_from_str("2023-01-15 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     time_out: NaiveDateTime::parse_from_str("2023-01-16 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(shift.duration(), Duration::hours(8));
    /// ```
    pub fn duration(&self) -> Duration {
        self.time_out - self.time_in
    }

    /// Returns the time between the end of this shift and the start of `next`.
    ///
    /// Negative when the shifts overlap.
    pub fn gap_until(&self, next: &Shift) -> Duration {
        next.time_in - self.time_out
    }
}

/// A shift attributed to an employee working a position.
///
/// A `ShiftRecord` always clocks out strictly after it clocks in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The position the employee worked.
    pub position_id: String,
    /// The employee's name as written on the timecard.
    pub employee_name: String,
    /// When the employee clocked in.
    pub time_in: NaiveDateTime,
    /// When the employee clocked out.
    pub time_out: NaiveDateTime,
}

impl ShiftRecord {
    /// Creates a shift record, rejecting shifts that do not end after they start.
    ///
    /// The returned [`AuditError::InvalidShift`] carries line 0; callers that
    /// know the source line replace it.
    pub fn new(
        position_id: impl Into<String>,
        employee_name: impl Into<String>,
        time_in: NaiveDateTime,
        time_out: NaiveDateTime,
    ) -> AuditResult<Self> {
        if time_out <= time_in {
            return Err(AuditError::InvalidShift {
                line: 0,
                message: format!(
                    "time out {} is not after time in {}",
                    time_out, time_in
                ),
            });
        }

        Ok(Self {
            position_id: position_id.into(),
            employee_name: employee_name.into(),
            time_in,
            time_out,
        })
    }

    /// Returns the clock-in/clock-out pair of this record.
    pub fn shift(&self) -> Shift {
        Shift {
            time_in: self.time_in,
            time_out: self.time_out,
        }
    }

    /// Returns the length of the shift.
    pub fn duration(&self) -> Duration {
        self.shift().duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_8_hour_shift_duration() {
        let shift = Shift {
            time_in: make_datetime("2023-01-15", "09:00:00"),
            time_out: make_datetime("2023-01-15", "17:00:00"),
        };
        assert_eq!(shift.duration(), Duration::hours(8));
    }

    #[test]
    fn test_overnight_shift_duration() {
        let shift = Shift {
            time_in: make_datetime("2023-01-15", "22:00:00"),
            time_out: make_datetime("2023-01-16", "07:30:00"),
        };
        assert_eq!(shift.duration(), Duration::minutes(570));
    }

    #[test]
    fn test_gap_until_next_shift() {
        let first = Shift {
            time_in: make_datetime("2023-01-15", "01:00:00"),
            time_out: make_datetime("2023-01-15", "09:00:00"),
        };
        let second = Shift {
            time_in: make_datetime("2023-01-15", "11:00:00"),
            time_out: make_datetime("2023-01-15", "19:00:00"),
        };
        assert_eq!(first.gap_until(&second), Duration::hours(2));
    }

    #[test]
    fn test_gap_until_overlapping_shift_is_negative() {
        let first = Shift {
            time_in: make_datetime("2023-01-15", "08:00:00"),
            time_out: make_datetime("2023-01-15", "16:00:00"),
        };
        let second = Shift {
            time_in: make_datetime("2023-01-15", "15:00:00"),
            time_out: make_datetime("2023-01-15", "20:00:00"),
        };
        assert_eq!(first.gap_until(&second), Duration::hours(-1));
    }

    #[test]
    fn test_shift_record_new_accepts_valid_shift() {
        let record = ShiftRecord::new(
            "P-100",
            "Jane Doe",
            make_datetime("2023-01-15", "08:00:00"),
            make_datetime("2023-01-15", "16:00:00"),
        )
        .unwrap();

        assert_eq!(record.position_id, "P-100");
        assert_eq!(record.employee_name, "Jane Doe");
        assert_eq!(record.duration(), Duration::hours(8));
        assert_eq!(record.shift().time_in, record.time_in);
    }

    #[test]
    fn test_shift_record_new_rejects_reversed_shift() {
        let result = ShiftRecord::new(
            "P-100",
            "Jane Doe",
            make_datetime("2023-01-15", "16:00:00"),
            make_datetime("2023-01-15", "08:00:00"),
        );

        match result {
            Err(AuditError::InvalidShift { line, message }) => {
                assert_eq!(line, 0);
                assert!(message.contains("not after"));
            }
            _ => panic!("Expected InvalidShift error"),
        }
    }

    #[test]
    fn test_shift_record_new_rejects_zero_length_shift() {
        let time = make_datetime("2023-01-15", "08:00:00");
        assert!(ShiftRecord::new("P-100", "Jane Doe", time, time).is_err());
    }

    #[test]
    fn test_shift_serialization() {
        let shift = Shift {
            time_in: make_datetime("2023-01-15", "09:00:00"),
            time_out: make_datetime("2023-01-15", "17:00:00"),
        };

        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
