//! Link extraction: scan a note's text and resolve each link to a path.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::scanner::{self, RawLink};
use crate::export::types::{LinkKind, LinkReference};

/// Extract all local link references from `content`.
///
/// `source` is the file the content came from; relative link targets are
/// resolved against its directory. References are returned in order of
/// first occurrence, with duplicates (same resolved path) kept once.
pub fn extract_references(content: &str, source: &Path) -> Vec<LinkReference> {
    let source_dir = source.parent().unwrap_or_else(|| Path::new("."));
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut refs = Vec::new();

    for raw in scanner::scan(content) {
        let (kind, written) = match raw {
            RawLink::Wikilink(t) => (LinkKind::Note, t),
            RawLink::Inline(t) => (LinkKind::Asset, t),
        };

        if kind == LinkKind::Asset && has_url_scheme(&written) {
            tracing::debug!("Skipping external link: {}", written);
            continue;
        }

        let target = match kind {
            LinkKind::Note => note_target(&written),
            LinkKind::Asset => PathBuf::from(&written),
        };

        let path = if target.is_absolute() {
            target
        } else {
            source_dir.join(target)
        };

        if seen.insert(path.clone()) {
            refs.push(LinkReference {
                path,
                kind,
                written,
                source: source.to_path_buf(),
            });
        }
    }

    refs
}

/// Read `path` and extract its references.
///
/// An unreadable or missing file is a warning, never fatal: the export
/// simply proceeds with no links.
pub fn extract_from_file(path: &Path) -> Vec<LinkReference> {
    match fs::read_to_string(path) {
        Ok(content) => extract_references(&content, path),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Wikilink targets name notes; `.md` is appended only when the target
/// has no extension at all, so `[[diagram.svg]]` stays untouched.
fn note_target(written: &str) -> PathBuf {
    let path = PathBuf::from(written);
    if path.extension().is_none() {
        path.with_extension("md")
    } else {
        path
    }
}

fn has_url_scheme(target: &str) -> bool {
    target.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
