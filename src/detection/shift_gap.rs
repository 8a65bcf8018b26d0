//! Rest-gap detection between shifts.

use chrono::Duration;

use crate::models::Shift;

/// Finds the first pair of adjacent shifts separated by a short rest gap.
///
/// The gap is the next shift's clock-in minus the previous shift's
/// clock-out. It qualifies when `min_gap < gap < max_gap`; a gap equal to
/// either bound does not. Overlapping shifts have a negative gap and never
/// qualify while `min_gap` is non-negative.
///
/// Returns the index of the earlier shift of the first qualifying pair.
///
/// # Example
///
/// ```
/// use timecard_audit::detection::find_short_gap;
/// use timecard_audit::models::Shift;
/// use chrono::{Duration, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let shifts = [
///     Shift { time_in: at("2023-01-15 01:00"), time_out: at("2023-01-15 09:00") },
///     Shift { time_in: at("2023-01-15 11:00"), time_out: at("2023-01-15 19:00") },
/// ];
///
/// assert_eq!(find_short_gap(&shifts, Duration::hours(1), Duration::hours(10)), Some(0));
/// ```
pub fn find_short_gap(shifts: &[Shift], min_gap: Duration, max_gap: Duration) -> Option<usize> {
    shifts.windows(2).position(|pair| {
        let gap = pair[0].gap_until(&pair[1]);
        gap > min_gap && gap < max_gap
    })
}
