//! Timecard auditing for employee shift records.
//!
//! This crate reads timecard exports (position, employee, clock-in and
//! clock-out) and flags three scheduling anomalies per employee: seven
//! consecutive worked days, a rest gap of more than one but less than ten
//! hours between shifts, and a single shift longer than fourteen hours.

#![warn(missing_docs)]

pub mod config;
pub mod detection;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod timestamp;
