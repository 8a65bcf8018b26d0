//! Scheduling anomaly detection.
//!
//! This module groups shifts by employee and runs three independent passes
//! over each group: consecutive-day detection, short rest-gap detection and
//! long single-shift detection. Each pass stops at its first match, so an
//! employee receives at most one finding per category.

mod consecutive_days;
mod detector;
mod grouping;
mod long_shift;
mod shift_gap;

pub use consecutive_days::{CONSECUTIVE_DAYS, find_consecutive_days};
pub use detector::AnomalyDetector;
pub use grouping::{ShiftOrdering, group_records, group_rows};
pub use long_shift::find_long_shift;
pub use shift_gap::find_short_gap;
