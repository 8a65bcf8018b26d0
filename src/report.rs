//! Rendering of findings for output.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Finding;

/// How findings are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One `<employee> (Position ID: <position>) <message>` line per finding.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes `findings` to `writer`, one line each.
///
/// # Example
///
/// ```
/// use timecard_audit::models::{Finding, FindingCategory};
/// use timecard_audit::report::{render_findings, ReportFormat};
///
/// let findings = vec![Finding {
///     employee_name: "Jane Doe".to_string(),
///     position_id: "P-100".to_string(),
///     category: FindingCategory::ConsecutiveDays,
///     message: "worked for 7 consecutive days.".to_string(),
/// }];
///
/// let mut out = Vec::new();
/// render_findings(&findings, ReportFormat::Text, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Jane Doe (Position ID: P-100) worked for 7 consecutive days.\n"
/// );
/// ```
pub fn render_findings<W: Write>(
    findings: &[Finding],
    format: ReportFormat,
    writer: &mut W,
) -> io::Result<()> {
    for finding in findings {
        match format {
            ReportFormat::Text => writeln!(writer, "{}", finding)?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut *writer, finding)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FindingCategory;

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding {
                employee_name: "Jane Doe".to_string(),
                position_id: "P-100".to_string(),
                category: FindingCategory::ShortGapBetweenShifts,
                message: "has less than 10 hours but more than 1 hour between shifts."
                    .to_string(),
            },
            Finding {
                employee_name: "John Roe".to_string(),
                position_id: "P-200".to_string(),
                category: FindingCategory::LongSingleShift,
                message: "worked for more than 14 hours in a single shift.".to_string(),
            },
        ]
    }

    fn render(format: ReportFormat) -> String {
        let mut out = Vec::new();
        render_findings(&sample_findings(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_one_line_per_finding() {
        assert_eq!(
            render(ReportFormat::Text),
            "Jane Doe (Position ID: P-100) has less than 10 hours but more than 1 hour between shifts.\n\
             John Roe (Position ID: P-200) worked for more than 14 hours in a single shift.\n"
        );
    }

    #[test]
    fn test_json_report_one_object_per_line() {
        let output = render(ReportFormat::Json);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["employee_name"], "Jane Doe");
        assert_eq!(first["position_id"], "P-100");
        assert_eq!(first["category"], "short_gap_between_shifts");
    }

    #[test]
    fn test_no_findings_renders_nothing() {
        let mut out = Vec::new();
        render_findings(&[], ReportFormat::Text, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_format_value_enum() {
        assert_eq!(ReportFormat::value_variants().len(), 2);
        assert_eq!(
            ReportFormat::Text.to_possible_value().unwrap().get_name(),
            "text"
        );
        assert_eq!(
            ReportFormat::Json.to_possible_value().unwrap().get_name(),
            "json"
        );
        assert_eq!(
            ReportFormat::from_str("JSON", true),
            Ok(ReportFormat::Json)
        );
        assert!(ReportFormat::from_str("yaml", true).is_err());
    }
}
