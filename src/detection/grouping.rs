//! Grouping of shift records by employee.
//!
//! Rows are keyed by `(position id, employee name)` in a single map. Groups
//! come back in key order so detection output is reproducible.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::models::{EmployeeKey, EmployeeShiftGroup, Shift, ShiftRecord, TimecardRow};

/// The order in which an employee's shifts are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShiftOrdering {
    /// Scan shifts in the order their rows appear in the source.
    #[default]
    InputOrder,
    /// Sort each employee's shifts by clock-in time before scanning.
    Chronological,
}

/// Groups shift records by position and employee.
///
/// Shifts within a group keep the order of `records` unless `ordering` is
/// [`ShiftOrdering::Chronological`], in which case they are stably sorted by
/// clock-in time.
///
/// # Example
///
/// ```
/// use timecard_audit::detection::{ShiftOrdering, group_records};
/// use timecard_audit::models::ShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let records = vec![
///     ShiftRecord::new("P-2", "Ann", at("2023-01-15 08:00"), at("2023-01-15 16:00")).unwrap(),
///     ShiftRecord::new("P-1", "Bob", at("2023-01-15 08:00"), at("2023-01-15 16:00")).unwrap(),
///     ShiftRecord::new("P-2", "Ann", at("2023-01-16 08:00"), at("2023-01-16 16:00")).unwrap(),
/// ];
///
/// let groups = group_records(&records, ShiftOrdering::InputOrder);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key.employee_name, "Bob");
/// assert_eq!(groups[1].shifts.len(), 2);
/// ```
pub fn group_records(records: &[ShiftRecord], ordering: ShiftOrdering) -> Vec<EmployeeShiftGroup> {
    let pairs = records.iter().map(|record| {
        (
            EmployeeKey::new(record.position_id.as_str(), record.employee_name.as_str()),
            record.shift(),
        )
    });
    group_pairs(pairs, ordering)
}

/// Groups loaded timecard rows by position and employee.
///
/// Rows lacking a position, an employee name or a valid pair of timestamps
/// are skipped without a diagnostic; the loader has already reported any
/// timestamp that failed to parse. A row that clocks out at or before its
/// clock-in is still scanned as punched, with a warning.
pub fn group_rows(rows: &[TimecardRow], ordering: ShiftOrdering) -> Vec<EmployeeShiftGroup> {
    let pairs = rows.iter().filter_map(|row| {
        let Some((key, shift)) = row.employee_shift() else {
            debug!(line = row.line, "Row has no complete shift, skipping");
            return None;
        };

        if shift.time_out <= shift.time_in {
            warn!(
                line = row.line,
                employee = %key,
                time_in = %shift.time_in,
                time_out = %shift.time_out,
                "Shift does not end after it starts"
            );
        }

        Some((key, shift))
    });

    group_pairs(pairs, ordering)
}

fn group_pairs(
    pairs: impl Iterator<Item = (EmployeeKey, Shift)>,
    ordering: ShiftOrdering,
) -> Vec<EmployeeShiftGroup> {
    let mut groups: BTreeMap<EmployeeKey, EmployeeShiftGroup> = BTreeMap::new();

    for (key, shift) in pairs {
        groups
            .entry(key.clone())
            .or_insert_with(|| EmployeeShiftGroup::new(key))
            .shifts
            .push(shift);
    }

    groups
        .into_values()
        .map(|mut group| {
            if ordering == ShiftOrdering::Chronological {
                group.sort_chronologically();
            }
            group
        })
        .collect()
}
