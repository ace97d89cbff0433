//! Summary output for the export command.

use std::path::Path;

use mdexport_core::export::ExportSummary;
use serde::Serialize;

/// End-of-run report, printable as text or JSON.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub target: String,
    pub output_directory: String,
    pub notes_copied: usize,
    pub assets_copied: usize,
    pub total_copied: usize,
    pub skipped_missing: usize,
    pub conflicts: usize,
}

impl ExportReport {
    pub fn new(target: &Path, output_dir: &Path, summary: &ExportSummary) -> Self {
        Self {
            target: target.display().to_string(),
            output_directory: output_dir.display().to_string(),
            notes_copied: summary.notes_copied,
            assets_copied: summary.assets_copied,
            total_copied: summary.total_copied(),
            skipped_missing: summary.skipped_missing,
            conflicts: summary.conflicts,
        }
    }
}

pub fn print_summary(report: &ExportReport) {
    println!("Export complete: {} -> {}", report.target, report.output_directory);
    println!("Notes copied: {}", report.notes_copied);
    println!("Assets copied: {}", report.assets_copied);
    println!("Total files copied: {}", report.total_copied);
    if report.skipped_missing > 0 {
        println!("Skipped (missing on disk): {}", report.skipped_missing);
    }
    if report.conflicts > 0 {
        println!("Unresolved name conflicts: {}", report.conflicts);
    }
}

pub fn print_summary_json(report: &ExportReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing summary: {}", e),
    }
}
