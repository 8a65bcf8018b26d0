//! timecard-audit: flags scheduling anomalies in a timecard export.
//!
//! Findings are written to stdout. Diagnostics (unparseable rows, invalid
//! shifts, progress) go to stderr through `tracing`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use timecard_audit::config::ConfigLoader;
use timecard_audit::detection::{AnomalyDetector, ShiftOrdering};
use timecard_audit::ingest::TimecardLoader;
use timecard_audit::report::{ReportFormat, render_findings};

/// Flag consecutive days, short rest gaps and long shifts in timecards.
#[derive(Parser, Debug)]
#[command(name = "timecard-audit", version, about)]
struct Cli {
    /// Path to the timecard export (header row required).
    path: PathBuf,

    /// Path to a YAML file overriding the detection thresholds.
    #[arg(long, env = "TIMECARD_AUDIT_CONFIG")]
    config: Option<PathBuf>,

    /// Field delimiter of the export.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Sort each employee's shifts by clock-in time before scanning.
    #[arg(long)]
    sort_shifts: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }

    let config = ConfigLoader::load_or_default(cli.config.as_ref())
        .context("failed to load detection configuration")?
        .into_config();

    let ordering = if cli.sort_shifts {
        ShiftOrdering::Chronological
    } else {
        ShiftOrdering::InputOrder
    };
    let detector = AnomalyDetector::new(config)
        .context("invalid detection configuration")?
        .with_ordering(ordering);

    let loaded = TimecardLoader::new()
        .with_delimiter(cli.delimiter as u8)
        .load(&cli.path)
        .with_context(|| format!("failed to load timecards from {}", cli.path.display()))?;

    let findings = detector.analyze_rows(&loaded.rows);

    let stdout = io::stdout();
    render_findings(&findings, cli.format, &mut stdout.lock())
        .context("failed to write findings")?;

    info!(
        rows = loaded.rows.len(),
        diagnostics = loaded.diagnostics.len(),
        findings = findings.len(),
        "Done"
    );

    Ok(())
}
