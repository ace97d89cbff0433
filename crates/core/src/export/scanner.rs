//! Markdown link scanning.
//!
//! A small hand-rolled scanner rather than a regex, so the capture rules
//! for escapes and nested brackets are explicit and enumerable:
//!
//! - `[[target]]`, `[[target|alias]]`, `[[target#section]]` and
//!   `[[target#section|alias]]` capture `target` (text before the first
//!   `#` or `|`, trimmed). Brackets do not nest inside a wikilink; an
//!   unterminated `[[` captures nothing.
//! - `[label](dest)` and `![alt](dest)` capture `dest` (trimmed). The
//!   label may contain balanced nested brackets. `\[`, `\]` and `\)` are
//!   escapes and never open or close a token. An unterminated label or
//!   destination captures nothing.
//! - Empty targets and destinations are dropped.

/// A link as written in the text, before path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLink {
    /// Wikilink target with alias and section already stripped.
    Wikilink(String),
    /// Destination of an inline link or image.
    Inline(String),
}

/// Scan markdown text for link tokens, in order of first occurrence.
pub fn scan(text: &str) -> Vec<RawLink> {
    let bytes = text.as_bytes();
    let mut links = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'[' if bytes.get(i + 1) == Some(&b'[') => match scan_wikilink(text, i + 2) {
                Some((target, next)) => {
                    if !target.is_empty() {
                        links.push(RawLink::Wikilink(target));
                    }
                    i = next;
                }
                None => i += 2,
            },
            b'[' => match scan_inline(text, i + 1) {
                Some((dest, next)) => {
                    if !dest.is_empty() {
                        links.push(RawLink::Inline(dest));
                    }
                    i = next;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }

    links
}

/// Parse the inside of a `[[...]]`, starting just after the opening pair.
fn scan_wikilink(text: &str, start: usize) -> Option<(String, usize)> {
    let rest = &text[start..];
    let end = rest.find("]]")?;
    let inner = &rest[..end];

    // A stray `[` means this was not a wikilink after all.
    if inner.contains('[') {
        return None;
    }

    let target = inner.split(['#', '|']).next().unwrap_or("").trim();
    Some((target.to_string(), start + end + 2))
}

/// Parse `label](dest)`, starting just after the opening `[`.
fn scan_inline(text: &str, start: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    let mut i = start;
    let mut depth = 0usize;

    // Label: balanced brackets, backslash escapes.
    loop {
        match bytes.get(i)? {
            b'\\' => i += 2,
            b'[' => {
                depth += 1;
                i += 1;
            }
            b']' if depth == 0 => break,
            b']' => {
                depth -= 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    // The destination must follow the label immediately.
    if bytes.get(i + 1) != Some(&b'(') {
        return None;
    }

    let dest_start = i + 2;
    let mut j = dest_start;
    loop {
        match bytes.get(j)? {
            b'\\' => j += 2,
            b')' => break,
            _ => j += 1,
        }
    }

    let dest = text[dest_start..j].trim().to_string();
    Some((dest, j + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wikilinks(text: &str) -> Vec<String> {
        scan(text)
            .into_iter()
            .filter_map(|l| match l {
                RawLink::Wikilink(t) => Some(t),
                RawLink::Inline(_) => None,
            })
            .collect()
    }

    fn inlines(text: &str) -> Vec<String> {
        scan(text)
            .into_iter()
            .filter_map(|l| match l {
                RawLink::Inline(t) => Some(t),
                RawLink::Wikilink(_) => None,
            })
            .collect()
    }

    #[test]
    fn scans_basic_wikilink() {
        assert_eq!(wikilinks("see [[other-note]] here"), vec!["other-note"]);
    }

    #[test]
    fn strips_alias_and_section() {
        assert_eq!(wikilinks("[[note|Display]]"), vec!["note"]);
        assert_eq!(wikilinks("[[note#heading]]"), vec!["note"]);
        assert_eq!(wikilinks("[[note#heading|Display]]"), vec!["note"]);
    }

    #[test]
    fn unterminated_wikilink_captures_nothing() {
        assert!(scan("open [[never closed").is_empty());
    }

    #[test]
    fn empty_wikilink_is_dropped() {
        assert!(scan("[[]] and [[ ]]").is_empty());
    }

    #[test]
    fn scans_inline_link_and_image() {
        assert_eq!(inlines("a [doc](notes/doc.md) b"), vec!["notes/doc.md"]);
        assert_eq!(inlines("![img](images/sample.png)"), vec!["images/sample.png"]);
    }

    #[test]
    fn label_may_nest_brackets() {
        assert_eq!(inlines("[a [nested] label](target.pdf)"), vec!["target.pdf"]);
    }

    #[test]
    fn escaped_brackets_do_not_open_links() {
        assert!(scan(r"not a link: \[x\](y)").is_empty());
        assert_eq!(wikilinks(r"\\[[real]]"), vec!["real"]);
    }

    #[test]
    fn bracket_without_destination_is_plain_text() {
        assert!(scan("[just brackets] and [more] text").is_empty());
    }

    #[test]
    fn unterminated_destination_captures_nothing() {
        assert!(scan("[label](never-closed").is_empty());
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let links = scan("[[a]] then [b](b.png) then [[c]]");
        assert_eq!(
            links,
            vec![
                RawLink::Wikilink("a".to_string()),
                RawLink::Inline("b.png".to_string()),
                RawLink::Wikilink("c".to_string()),
            ]
        );
    }
}
