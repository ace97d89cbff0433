//! Data structures for the export pipeline.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal errors that abort an export run.
///
/// Everything else (missing linked files, unresolvable links, name
/// conflicts) is a warning and the run continues.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("target file not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("target file is not a markdown file: {0}")]
    NotMarkdown(PathBuf),

    #[error("cannot write output directory {path}: {source}")]
    OutputDirUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {src} to {dest}: {source}")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What kind of file a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A markdown note referenced with `[[wikilink]]` syntax.
    Note,
    /// Anything referenced with `[text](path)` or `![alt](path)`.
    Asset,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Note => "note",
            LinkKind::Asset => "asset",
        }
    }
}

/// A link discovered in a source file, already resolved to a path.
#[derive(Debug, Clone)]
pub struct LinkReference {
    /// Resolved path of the link target (absolute, or relative to the
    /// process working directory when the source path was relative).
    pub path: PathBuf,
    pub kind: LinkKind,
    /// The link target exactly as written in the source text.
    pub written: String,
    /// File the link was found in.
    pub source: PathBuf,
}

/// One file the plan will copy, under its final destination name.
#[derive(Debug, Clone)]
pub struct PlannedCopy {
    pub source: PathBuf,
    pub dest_name: String,
    pub kind: LinkKind,
}

/// A source file whose base name and parent-prefixed name were both
/// already claimed by different files. It will not be exported.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub source: PathBuf,
    /// The destination names that were already taken.
    pub taken: Vec<String>,
}

/// Outcome of claiming a destination name for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The base filename was free and is now claimed.
    Claimed(String),
    /// The base name was taken; this file got its parent-prefixed name.
    /// When the previous owner of the base name was still using it, it
    /// was renamed to its own prefixed form as well (`displaced`), so
    /// both sides of a collision end up disambiguated.
    Prefixed {
        dest: String,
        displaced: Option<(PathBuf, String)>,
    },
    /// This exact source already has a destination in the plan.
    AlreadyPlanned,
    /// Base name and fallback both taken by other files; recorded as a
    /// conflict, nothing is overwritten.
    Conflicted,
}

/// Accumulates the source -> destination-filename mapping for one run.
///
/// Destination names are unique within the plan and copy order is claim
/// order. The plan is an owned value threaded through the assembler, so
/// a run's state can be inspected and tested in isolation.
#[derive(Debug, Default)]
pub struct ExportPlan {
    entries: Vec<PlannedCopy>,
    claimed: HashMap<String, PathBuf>,
    conflicts: Vec<Conflict>,
}

impl ExportPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a destination filename for `source`.
    ///
    /// Tries the bare filename first, then `parent-filename`. On a
    /// collision both sides carry their parent prefix: the previous
    /// owner of the bare name is renamed to its prefixed form, and the
    /// bare name stays reserved so later claimants collide
    /// deterministically. A second claim for the same source is a
    /// no-op, which makes repeated references (and re-runs over the
    /// same inputs) idempotent.
    pub fn claim(&mut self, source: &Path, kind: LinkKind) -> ClaimOutcome {
        let base = file_name_of(source);
        match self.claimed.get(&base) {
            None => {
                self.insert(source, base.clone(), kind);
                return ClaimOutcome::Claimed(base);
            }
            Some(owner) if owner == source => return ClaimOutcome::AlreadyPlanned,
            Some(_) => {}
        }

        let displaced = self.rename_base_owner(&base);

        let prefixed = parent_prefixed(source, &base);
        match self.claimed.get(&prefixed) {
            None => {
                self.insert(source, prefixed.clone(), kind);
                ClaimOutcome::Prefixed {
                    dest: prefixed,
                    displaced,
                }
            }
            Some(owner) if owner == source => ClaimOutcome::AlreadyPlanned,
            Some(_) => {
                self.conflicts.push(Conflict {
                    source: source.to_path_buf(),
                    taken: vec![base, prefixed],
                });
                ClaimOutcome::Conflicted
            }
        }
    }

    /// Move the current owner of `base` onto its parent-prefixed name.
    ///
    /// Returns the owner and its new name, or `None` when the owner was
    /// already renamed by an earlier collision or its prefixed name is
    /// unavailable.
    fn rename_base_owner(&mut self, base: &str) -> Option<(PathBuf, String)> {
        let owner = self.claimed.get(base)?.clone();
        let entry_idx = self
            .entries
            .iter()
            .position(|e| e.source == owner && e.dest_name == base)?;

        let prefixed = parent_prefixed(&owner, base);
        if prefixed == base || self.claimed.contains_key(&prefixed) {
            return None;
        }

        self.claimed.insert(prefixed.clone(), owner.clone());
        self.entries[entry_idx].dest_name = prefixed.clone();
        Some((owner, prefixed))
    }

    fn insert(&mut self, source: &Path, dest_name: String, kind: LinkKind) {
        self.claimed.insert(dest_name.clone(), source.to_path_buf());
        self.entries.push(PlannedCopy {
            source: source.to_path_buf(),
            dest_name,
            kind,
        });
    }

    /// Planned copies in claim order.
    pub fn entries(&self) -> &[PlannedCopy] {
        &self.entries
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Destination name planned for a source path, if any.
    pub fn destination_for(&self, source: &Path) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.dest_name.as_str())
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub notes_copied: usize,
    pub assets_copied: usize,
    pub skipped_missing: usize,
    pub conflicts: usize,
}

impl ExportSummary {
    pub fn total_copied(&self) -> usize {
        self.notes_copied + self.assets_copied
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string())
}

fn parent_prefixed(path: &Path, base: &str) -> String {
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if parent.is_empty() {
        base.to_string()
    } else {
        format!("{parent}-{base}")
    }
}
