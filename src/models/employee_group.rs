//! Per-employee shift groups.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Shift;

/// The grouping key for shifts: a position and the employee working it.
///
/// Ordered by position first, then employee name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeKey {
    /// The position identifier.
    pub position_id: String,
    /// The employee name.
    pub employee_name: String,
}

impl EmployeeKey {
    /// Creates a key from a position and employee name.
    pub fn new(position_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            position_id: position_id.into(),
            employee_name: employee_name.into(),
        }
    }
}

impl fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Position ID: {})", self.employee_name, self.position_id)
    }
}

/// All shifts worked by one employee in one position, in analysis order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeShiftGroup {
    /// Who the shifts belong to.
    pub key: EmployeeKey,
    /// The shifts, in the order detection scans them.
    pub shifts: Vec<Shift>,
}

impl EmployeeShiftGroup {
    /// Creates an empty group for `key`.
    pub fn new(key: EmployeeKey) -> Self {
        Self {
            key,
            shifts: Vec::new(),
        }
    }

    /// Sorts the shifts by clock-in time, keeping input order for ties.
    pub fn sort_chronologically(&mut self) {
        self.shifts.sort_by_key(|shift| shift.time_in);
    }
}
