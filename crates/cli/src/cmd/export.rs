//! Export command implementation.

use mdexport_core::export::{self, ExportError};

use super::output::{print_summary, print_summary_json, ExportReport};
use crate::ExportArgs;

pub fn run(args: &ExportArgs) {
    tracing::debug!(
        "Exporting {} to {}",
        args.target_file.display(),
        args.output_directory.display()
    );

    match export::export(&args.target_file, &args.output_directory) {
        Ok(summary) => {
            let report = ExportReport::new(&args.target_file, &args.output_directory, &summary);
            if args.json {
                print_summary_json(&report);
            } else {
                print_summary(&report);
            }
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

fn print_error(e: &ExportError) {
    match e {
        ExportError::TargetNotFound(path) => {
            eprintln!("Error: Target file not found: {}", path.display());
        }
        ExportError::NotMarkdown(path) => {
            eprintln!("Error: Target file is not a markdown file: {}", path.display());
        }
        ExportError::OutputDirUnwritable { path, .. } => {
            eprintln!("Error: Cannot write output directory: {}", path.display());
        }
        _ => {
            eprintln!("Error: {}", e);
        }
    }
}
