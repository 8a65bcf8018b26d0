//! Finding models.
//!
//! A [`Finding`] is a single reported anomaly for one employee in one
//! [`FindingCategory`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of scheduling anomaly a finding reports.
///
/// # Example
///
/// ```
/// use timecard_audit::models::FindingCategory;
///
/// let category = FindingCategory::LongSingleShift;
/// assert_eq!(category.to_string(), "LongSingleShift");
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"long_single_shift\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Seven shifts in a row each started exactly one day after the previous.
    ConsecutiveDays,
    /// Too little rest between the end of one shift and the start of the next.
    ShortGapBetweenShifts,
    /// A single shift ran longer than the configured limit.
    LongSingleShift,
}

impl FindingCategory {
    /// Returns the sentence reported after the employee for this category.
    pub fn message(self) -> &'static str {
        match self {
            FindingCategory::ConsecutiveDays => "worked for 7 consecutive days.",
            FindingCategory::ShortGapBetweenShifts => {
                "has less than 10 hours but more than 1 hour between shifts."
            }
            FindingCategory::LongSingleShift => "worked for more than 14 hours in a single shift.",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::ConsecutiveDays => write!(f, "ConsecutiveDays"),
            FindingCategory::ShortGapBetweenShifts => write!(f, "ShortGapBetweenShifts"),
            FindingCategory::LongSingleShift => write!(f, "LongSingleShift"),
        }
    }
}

/// A single anomaly reported for an employee.
///
/// Displays as `<employee> (Position ID: <position>) <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// The employee the finding is about.
    pub employee_name: String,
    /// The position the employee worked.
    pub position_id: String,
    /// What kind of anomaly was found.
    pub category: FindingCategory,
    /// The human-readable description, e.g. "worked for 7 consecutive days."
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Position ID: {}) {}",
            self.employee_name, self.position_id, self.message
        )
    }
}
