//! Timecard loading functionality.
//!
//! This module provides the [`TimecardLoader`] type for reading
//! delimiter-separated timecard exports into [`TimecardRow`]s.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::{AuditError, AuditResult};
use crate::models::{
    EMPLOYEE_NAME_FIELD, POSITION_ID_FIELD, ShiftRecord, TIME_IN_FIELD, TIME_OUT_FIELD,
    TimecardRow, is_timestamp_field,
};
use crate::timestamp::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};

/// Columns the detector needs in order to analyse a timecard source.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    POSITION_ID_FIELD,
    EMPLOYEE_NAME_FIELD,
    TIME_IN_FIELD,
    TIME_OUT_FIELD,
];

/// Everything read from one timecard source.
#[derive(Debug, Default)]
pub struct LoadedTimecards {
    /// The header row, trimmed.
    pub headers: Vec<String>,
    /// The data rows, in source order.
    pub rows: Vec<TimecardRow>,
    /// Row-level problems that were recovered from while loading.
    ///
    /// Holds [`AuditError::RowParse`] and [`AuditError::UnreadableRow`] values.
    pub diagnostics: Vec<AuditError>,
}

impl LoadedTimecards {
    /// Returns the rows that form complete, valid shifts.
    ///
    /// Rows without a position, an employee name or both timestamps are
    /// skipped. Rows that clock out before they clock in are skipped with a
    /// warning.
    pub fn shift_records(&self) -> Vec<ShiftRecord> {
        self.rows
            .iter()
            .filter_map(|row| match row.to_shift_record() {
                Ok(record) => record,
                Err(err) => {
                    warn!(error = %err, "Skipping invalid shift");
                    None
                }
            })
            .collect()
    }

    /// Returns the required columns that the header row does not contain.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !self.headers.iter().any(|h| h == column))
            .collect()
    }
}

/// Reads timecard exports with a header row.
///
/// Each data record is matched to the headers by position. Records shorter
/// than the header row only populate the leading fields; surplus values are
/// ignored. The "Time" and "Time Out" columns are parsed as
/// `MM/DD/YYYY hh:mm AM|PM`: an empty value is kept as `""`, while a value that
/// does not parse is reported as a diagnostic and left out of the row.
///
/// # Example
///
/// ```
/// use timecard_audit::ingest::TimecardLoader;
///
/// let data = "Position ID,Employee Name,Time,Time Out\n\
///             P-100,Jane Doe,1/15/2023 8:00 AM,1/15/2023 4:00 PM\n\
///             P-100,Jane Doe,not a time,1/16/2023 4:00 PM\n";
///
/// let loaded = TimecardLoader::new()
///     .load_reader(data.as_bytes(), "inline")
///     .unwrap();
///
/// assert_eq!(loaded.rows.len(), 2);
/// assert_eq!(loaded.rows[0].get("Time"), Some("01/15/2023 08:00 AM"));
/// assert_eq!(loaded.rows[1].get("Time"), None);
/// assert_eq!(loaded.diagnostics.len(), 1);
/// assert_eq!(loaded.shift_records().len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimecardLoader {
    delimiter: u8,
}

impl Default for TimecardLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TimecardLoader {
    /// Creates a loader for comma-separated input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `delimiter` to separate fields instead of a comma.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Loads timecards from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::SourceUnavailable`] when the file cannot be
    /// opened or read. Problems with individual rows never fail the load.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> AuditResult<LoadedTimecards> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| AuditError::SourceUnavailable {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        self.load_reader(file, &path_str)
    }

    /// Loads timecards from any reader; `source` names it in errors and logs.
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> AuditResult<LoadedTimecards> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut loaded = LoadedTimecards::default();
        let mut records = csv_reader.records();

        match records.next() {
            None => {
                info!(source = %source, "Timecard source is empty");
                return Ok(loaded);
            }
            Some(Ok(header)) => {
                loaded.headers = header.iter().map(str::to_string).collect();
            }
            Some(Err(err)) => {
                return Err(AuditError::SourceUnavailable {
                    path: source.to_string(),
                    message: format!("unreadable header row: {}", err),
                });
            }
        }

        let missing = loaded.missing_columns();
        if !missing.is_empty() {
            warn!(source = %source, ?missing, "Timecard source is missing required columns");
        }

        for (index, result) in records.enumerate() {
            // Header is line 1; used only when the reader has no position.
            let fallback_line = index + 2;

            match result {
                Ok(record) => {
                    let line = record
                        .position()
                        .map_or(fallback_line, |p| p.line() as usize);
                    let row = map_record(&loaded.headers, &record, line, &mut loaded.diagnostics);
                    loaded.rows.push(row);
                }
                Err(err) if err.is_io_error() => {
                    return Err(AuditError::SourceUnavailable {
                        path: source.to_string(),
                        message: err.to_string(),
                    });
                }
                Err(err) => {
                    let line = err
                        .position()
                        .map_or(fallback_line, |p| p.line() as usize);
                    let diagnostic = AuditError::UnreadableRow {
                        line,
                        message: err.to_string(),
                    };
                    warn!(source = %source, "{}", diagnostic);
                    loaded.diagnostics.push(diagnostic);
                }
            }
        }

        info!(
            source = %source,
            rows = loaded.rows.len(),
            diagnostics = loaded.diagnostics.len(),
            "Loaded timecards"
        );

        Ok(loaded)
    }
}

/// Pairs a record's values with the headers and normalizes timestamp fields.
fn map_record(
    headers: &[String],
    record: &StringRecord,
    line: usize,
    diagnostics: &mut Vec<AuditError>,
) -> TimecardRow {
    if record.len() < headers.len() {
        debug!(line, expected = headers.len(), found = record.len(), "Short row");
    }

    let mut fields = BTreeMap::new();

    for (header, value) in headers.iter().zip(record.iter()) {
        if !is_timestamp_field(header) || value.is_empty() {
            fields.insert(header.clone(), value.to_string());
            continue;
        }

        match parse_timestamp(value, TIMESTAMP_FORMAT) {
            Ok(parsed) => {
                fields.insert(header.clone(), format_timestamp(parsed, TIMESTAMP_FORMAT));
            }
            Err(err) => {
                let diagnostic = AuditError::RowParse {
                    line,
                    field: header.clone(),
                    value: value.to_string(),
                    message: format!("unparseable {} \"{}\": {}", header, value, err),
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    TimecardRow::new(line, fields)
}
