use crate::errors::BackupError;
use crate::stats::TraversalStats;
use crate::utils::bytes_to_mb;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const BACKUP_INFO_FILE: &str = "backup_info.json";
pub const BACKUP_INFO_VERSION: &str = "1.0";

/// Metadata record describing one finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub started_at: String,
    pub finished_at: String,
    pub duration_secs: f64,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub stats: TraversalStats,
    pub version: String,
}

impl RunSummary {
    pub fn new(
        source: &Path,
        destination: &Path,
        dry_run: bool,
        stats: TraversalStats,
        started_at: DateTime<Local>,
        finished_at: DateTime<Local>,
    ) -> Self {
        let duration_secs = (finished_at - started_at)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        RunSummary {
            timestamp: Local::now().to_rfc3339(),
            started_at: started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            duration_secs,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            dry_run,
            stats,
            version: BACKUP_INFO_VERSION.to_owned(),
        }
    }
}

pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let rule = "=".repeat(50);
    let title = if summary.dry_run {
        "BACKUP SUMMARY (DRY RUN)"
    } else {
        "BACKUP SUMMARY"
    };

    vec![
        rule.clone(),
        title.to_owned(),
        rule,
        format!("Files copied: {}", summary.stats.copied),
        format!("Files skipped: {}", summary.stats.skipped),
        format!("Errors: {}", summary.stats.errors),
        format!("Size copied: {:.2} MB", bytes_to_mb(summary.stats.size_copied)),
        format!("Duration: {:.2}s", summary.duration_secs),
        format!("Backup location: {}", summary.destination.display()),
    ]
}

pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        info!("{}", line);
    }
}

/// Writes the summary as pretty JSON to `<dir>/backup_info.json`.
pub fn write_backup_info(summary: &RunSummary, dir: &Path) -> Result<PathBuf, BackupError> {
    let info_file = dir.join(BACKUP_INFO_FILE);
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&info_file, json)?;
    Ok(info_file)
}
