//! Timecard ingestion.
//!
//! Reads delimiter-separated timecard exports into row maps, parsing the
//! clock-in and clock-out columns and collecting row-level diagnostics.

mod loader;

pub use loader::{LoadedTimecards, REQUIRED_COLUMNS, TimecardLoader};
