//! Core data models for timecard auditing.
//!
//! This module contains all the domain models used throughout the crate.

mod employee_group;
mod finding;
mod shift;
mod timecard_row;

pub use employee_group::{EmployeeKey, EmployeeShiftGroup};
pub use finding::{Finding, FindingCategory};
pub use shift::{Shift, ShiftRecord};
pub use timecard_row::{
    EMPLOYEE_NAME_FIELD, POSITION_ID_FIELD, TIME_IN_FIELD, TIME_OUT_FIELD, TimecardRow,
    is_timestamp_field,
};
