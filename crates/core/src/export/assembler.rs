//! Export assembly: build the copy plan and run the copy pass.

use std::fs;
use std::path::Path;

use crate::export::types::{
    ClaimOutcome, ExportError, ExportPlan, ExportSummary, LinkKind, LinkReference,
};

/// Build the destination plan for the target file plus its references.
///
/// The target claims its name first, then each reference in extraction
/// order, so the exported note itself always keeps its own filename.
pub fn build_plan(target: &Path, refs: &[LinkReference]) -> ExportPlan {
    let mut plan = ExportPlan::new();
    claim(&mut plan, target, LinkKind::Note);
    for r in refs {
        claim(&mut plan, &r.path, r.kind);
    }
    plan
}

fn claim(plan: &mut ExportPlan, source: &Path, kind: LinkKind) {
    match plan.claim(source, kind) {
        ClaimOutcome::Claimed(_) | ClaimOutcome::AlreadyPlanned => {}
        ClaimOutcome::Prefixed { dest, displaced } => {
            tracing::warn!(
                "Filename collision for {}, exporting as {}",
                source.display(),
                dest
            );
            if let Some((other, renamed)) = displaced {
                tracing::warn!("Renaming colliding {} to {}", other.display(), renamed);
            }
        }
        ClaimOutcome::Conflicted => {
            tracing::warn!(
                "Unresolvable filename conflict for {}, file will not be exported",
                source.display()
            );
        }
    }
}

/// Copy every planned file into `output_dir`, byte for byte.
///
/// Sources missing on disk are warned about and counted, not fatal. A
/// copy that fails for any other reason aborts the run, since it means
/// the output directory is not usable.
pub fn copy_plan(plan: &ExportPlan, output_dir: &Path) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary {
        conflicts: plan.conflicts().len(),
        ..ExportSummary::default()
    };

    for entry in plan.entries() {
        if !entry.source.exists() {
            tracing::warn!("Linked file not found, skipping: {}", entry.source.display());
            summary.skipped_missing += 1;
            continue;
        }

        let dest = output_dir.join(&entry.dest_name);
        fs::copy(&entry.source, &dest).map_err(|e| ExportError::CopyFailed {
            src: entry.source.to_path_buf(),
            dest: dest.clone(),
            source: e,
        })?;

        tracing::info!("Copied {} as {}", entry.source.display(), entry.dest_name);
        match entry.kind {
            LinkKind::Note => summary.notes_copied += 1,
            LinkKind::Asset => summary.assets_copied += 1,
        }
    }

    Ok(summary)
}
