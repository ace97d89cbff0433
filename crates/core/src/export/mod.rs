//! Single-note export: link extraction, collision-resolving plan, copy pass.

pub mod assembler;
pub mod extractor;
pub mod scanner;
pub mod types;

use std::fs;
use std::path::Path;

pub use assembler::{build_plan, copy_plan};
pub use extractor::{extract_from_file, extract_references};
pub use types::{
    ClaimOutcome, Conflict, ExportError, ExportPlan, ExportSummary, LinkKind, LinkReference,
    PlannedCopy,
};

/// Export `target` and every file it links to directly into `output_dir`.
///
/// The output directory is created if missing. Unresolvable links and
/// missing linked files are warned about and skipped; only an invalid
/// target or an unwritable output directory is fatal.
pub fn export(target: &Path, output_dir: &Path) -> Result<ExportSummary, ExportError> {
    if !target.is_file() {
        return Err(ExportError::TargetNotFound(target.to_path_buf()));
    }
    if !is_markdown(target) {
        return Err(ExportError::NotMarkdown(target.to_path_buf()));
    }

    fs::create_dir_all(output_dir).map_err(|e| ExportError::OutputDirUnwritable {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let refs = extractor::extract_from_file(target);
    let plan = assembler::build_plan(target, &refs);
    assembler::copy_plan(&plan, output_dir)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}
