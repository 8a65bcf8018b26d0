//! Long single-shift detection.

use chrono::Duration;

use crate::models::Shift;

/// Finds the first shift that lasts strictly longer than `max_shift`.
///
/// A shift of exactly `max_shift` is allowed.
///
/// # Example
///
/// ```
/// use timecard_audit::detection::find_long_shift;
/// use timecard_audit::models::Shift;
/// use chrono::{Duration, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = [Shift { time_in: at("2023-01-15 08:00"), time_out: at("2023-01-15 23:00") }];
///
/// assert_eq!(find_long_shift(&shifts, Duration::hours(14)), Some(0));
/// assert_eq!(find_long_shift(&shifts, Duration::hours(15)), None);
/// ```
pub fn find_long_shift(shifts: &[Shift], max_shift: Duration) -> Option<usize> {
    shifts.iter().position(|shift| shift.duration() > max_shift)
}
