//! Consecutive-day detection.
//!
//! An employee has worked consecutive days when a run of shifts each starts
//! exactly 24 hours after the previous one. Only clock-in times matter; a
//! punch that drifts by a single minute breaks the run.

use chrono::Duration;

use crate::models::Shift;

/// Number of consecutive daily clock-ins that is reported.
pub const CONSECUTIVE_DAYS: usize = 7;

/// Finds the first window of `window` shifts whose clock-in times are each
/// exactly one day apart.
///
/// The window slides one shift at a time over `shifts` in the order given.
/// Returns the index of the first shift of the first matching window, or
/// `None` when no window matches (including when there are fewer than
/// `window` shifts).
///
/// # Example
///
/// ```
/// use timecard_audit::detection::find_consecutive_days;
/// use timecard_audit::models::Shift;
/// use chrono::{Duration, NaiveDateTime};
///
/// let start = NaiveDateTime::parse_from_str("2023-01-01 08:00", "%Y-%m-%d %H:%M").unwrap();
/// let shifts: Vec<Shift> = (0..7)
///     .map(|day| Shift {
///         time_in: start + Duration::days(day),
///         time_out: start + Duration::days(day) + Duration::hours(8),
///     })
///     .collect();
///
/// assert_eq!(find_consecutive_days(&shifts, 7), Some(0));
/// assert_eq!(find_consecutive_days(&shifts[1..], 7), None);
/// ```
pub fn find_consecutive_days(shifts: &[Shift], window: usize) -> Option<usize> {
    if window == 0 {
        return None;
    }

    let one_day = Duration::days(1);

    shifts.windows(window).position(|days| {
        days.windows(2)
            .all(|pair| pair[1].time_in - pair[0].time_in == one_day)
    })
}
