//! Configuration types for anomaly detection.
//!
//! This module contains the strongly-typed thresholds deserialized from a
//! detection YAML file. Every field has a default, so an empty file (or no
//! file at all) yields the standard thresholds.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

/// Default lower bound (exclusive) of a short gap, in minutes.
pub const DEFAULT_MIN_GAP_MINUTES: i64 = 60;
/// Default upper bound (exclusive) of a short gap, in minutes.
pub const DEFAULT_MAX_GAP_MINUTES: i64 = 10 * 60;
/// Default longest allowed single shift, in minutes.
pub const DEFAULT_MAX_SHIFT_MINUTES: i64 = 14 * 60;

/// Thresholds for the gap and long-shift passes.
///
/// # Example
///
/// ```
/// use timecard_audit::config::DetectionConfig;
/// use chrono::Duration;
///
/// let config: DetectionConfig = serde_yaml::from_str("max_shift_minutes: 720").unwrap();
/// assert_eq!(config.max_shift(), Duration::hours(12));
/// assert_eq!(config.max_gap(), Duration::hours(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionConfig {
    /// A gap between shifts must be longer than this to be flagged.
    pub min_gap_minutes: i64,
    /// A gap between shifts must be shorter than this to be flagged.
    pub max_gap_minutes: i64,
    /// A single shift longer than this is flagged.
    pub max_shift_minutes: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_gap_minutes: DEFAULT_MIN_GAP_MINUTES,
            max_gap_minutes: DEFAULT_MAX_GAP_MINUTES,
            max_shift_minutes: DEFAULT_MAX_SHIFT_MINUTES,
        }
    }
}

impl DetectionConfig {
    /// Returns the exclusive lower bound of a short gap.
    ///
    /// Falls back to the default for a value [`DetectionConfig::validate`]
    /// would reject.
    pub fn min_gap(&self) -> Duration {
        minutes_or(self.min_gap_minutes, DEFAULT_MIN_GAP_MINUTES)
    }

    /// Returns the exclusive upper bound of a short gap.
    pub fn max_gap(&self) -> Duration {
        minutes_or(self.max_gap_minutes, DEFAULT_MAX_GAP_MINUTES)
    }

    /// Returns the longest shift that is not flagged.
    pub fn max_shift(&self) -> Duration {
        minutes_or(self.max_shift_minutes, DEFAULT_MAX_SHIFT_MINUTES)
    }

    /// Checks that the thresholds describe a usable detection run.
    pub fn validate(&self) -> AuditResult<()> {
        for (field, minutes) in [
            ("min_gap_minutes", self.min_gap_minutes),
            ("max_gap_minutes", self.max_gap_minutes),
            ("max_shift_minutes", self.max_shift_minutes),
        ] {
            if Duration::try_minutes(minutes).is_none() {
                return Err(AuditError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{} minutes is out of range", minutes),
                });
            }
        }

        if self.min_gap_minutes < 0 {
            return Err(AuditError::InvalidConfig {
                field: "min_gap_minutes".to_string(),
                message: format!("must not be negative, got {}", self.min_gap_minutes),
            });
        }

        if self.max_gap_minutes <= self.min_gap_minutes {
            return Err(AuditError::InvalidConfig {
                field: "max_gap_minutes".to_string(),
                message: format!(
                    "must be greater than min_gap_minutes ({}), got {}",
                    self.min_gap_minutes, self.max_gap_minutes
                ),
            });
        }

        if self.max_shift_minutes <= 0 {
            return Err(AuditError::InvalidConfig {
                field: "max_shift_minutes".to_string(),
                message: format!("must be positive, got {}", self.max_shift_minutes),
            });
        }

        Ok(())
    }
}

fn minutes_or(minutes: i64, default: i64) -> Duration {
    Duration::try_minutes(minutes)
        .or_else(|| Duration::try_minutes(default))
        .unwrap_or_else(Duration::zero)
}
