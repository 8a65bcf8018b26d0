//! The anomaly detector.
//!
//! Runs the three detection passes over every employee group and turns
//! matches into [`Finding`]s.

use tracing::{debug, info};

use crate::config::DetectionConfig;
use crate::error::AuditResult;
use crate::models::{EmployeeShiftGroup, Finding, FindingCategory, ShiftRecord, TimecardRow};

use super::consecutive_days::{CONSECUTIVE_DAYS, find_consecutive_days};
use super::grouping::{ShiftOrdering, group_records, group_rows};
use super::long_shift::find_long_shift;
use super::shift_gap::find_short_gap;

/// Flags consecutive days, short rest gaps and long shifts per employee.
///
/// Each employee receives at most one finding per category. Findings are
/// ordered by employee (position id, then name) and, within an employee, by
/// category: consecutive days, short gap, long shift.
///
/// # Example
///
/// ```
/// use timecard_audit::detection::AnomalyDetector;
/// use timecard_audit::ingest::TimecardLoader;
///
/// let data = "Position ID,Employee Name,Time,Time Out\n\
///             P-100,Jane Doe,01/15/2023 08:00 AM,01/15/2023 11:00 PM\n";
/// let loaded = TimecardLoader::new().load_reader(data.as_bytes(), "inline").unwrap();
///
/// let findings = AnomalyDetector::default().analyze_rows(&loaded.rows);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(
///     findings[0].to_string(),
///     "Jane Doe (Position ID: P-100) worked for more than 14 hours in a single shift."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    config: DetectionConfig,
    ordering: ShiftOrdering,
}

impl AnomalyDetector {
    /// Creates a detector, rejecting unusable thresholds.
    ///
    /// Shifts are scanned in input order until [`AnomalyDetector::with_ordering`]
    /// says otherwise.
    pub fn new(config: DetectionConfig) -> AuditResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ordering: ShiftOrdering::default(),
        })
    }

    /// Sets the order in which each employee's shifts are scanned.
    pub fn with_ordering(mut self, ordering: ShiftOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Returns the thresholds this detector runs with.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Returns the order in which shifts are scanned.
    pub fn ordering(&self) -> ShiftOrdering {
        self.ordering
    }

    /// Groups loaded rows by employee and analyses every group.
    pub fn analyze_rows(&self, rows: &[TimecardRow]) -> Vec<Finding> {
        let groups = group_rows(rows, self.ordering);
        self.analyze_groups(&groups)
    }

    /// Groups shift records by employee and analyses every group.
    pub fn analyze_records(&self, records: &[ShiftRecord]) -> Vec<Finding> {
        let groups = group_records(records, self.ordering);
        self.analyze_groups(&groups)
    }

    /// Analyses already-grouped shifts, in the order the groups are given.
    pub fn analyze_groups(&self, groups: &[EmployeeShiftGroup]) -> Vec<Finding> {
        let findings: Vec<Finding> = groups
            .iter()
            .flat_map(|group| self.analyze_group(group))
            .collect();

        info!(
            employees = groups.len(),
            findings = findings.len(),
            "Timecard analysis complete"
        );

        findings
    }

    /// Runs all three passes over one employee's shifts.
    ///
    /// The shifts are scanned in the order they are stored in the group.
    pub fn analyze_group(&self, group: &EmployeeShiftGroup) -> Vec<Finding> {
        let shifts = &group.shifts;
        let config = &self.config;

        let matches = [
            (
                FindingCategory::ConsecutiveDays,
                find_consecutive_days(shifts, CONSECUTIVE_DAYS),
            ),
            (
                FindingCategory::ShortGapBetweenShifts,
                find_short_gap(shifts, config.min_gap(), config.max_gap()),
            ),
            (
                FindingCategory::LongSingleShift,
                find_long_shift(shifts, config.max_shift()),
            ),
        ];

        matches
            .into_iter()
            .filter_map(|(category, index)| {
                let index = index?;
                debug!(
                    employee = %group.key,
                    %category,
                    shift_index = index,
                    "Anomaly detected"
                );
                Some(Finding {
                    employee_name: group.key.employee_name.clone(),
                    position_id: group.key.position_id.clone(),
                    category,
                    message: category.message().to_string(),
                })
            })
            .collect()
    }
}
