use super::text::heading;

/// Heading level of the nine top-level profile sections.
pub const SECTION_LEVEL: usize = 2;

/// A heading found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStart<'a> {
    /// Byte offset of the heading line.
    pub start: usize,
    /// Byte offset just past the heading line (including its newline).
    pub body: usize,
    pub level: usize,
    pub text: &'a str,
}

/// Find all heading positions in `source`.
#[must_use]
pub fn headings(source: &str) -> Vec<HeadingStart<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        if let Some((level, text)) = heading(line) {
            found.push(HeadingStart {
                start: offset,
                body: offset + line.len(),
                level,
                text,
            });
        }
        offset += line.len();
    }

    found
}

/// Body of the first heading with exactly `level` and `text`, ending at the
/// next heading of the same or a shallower level.
#[must_use]
pub fn find_block<'a>(source: &'a str, level: usize, text: &str) -> Option<&'a str> {
    block(source, level, text, |next| next <= level)
}

fn block<'a>(
    source: &'a str,
    level: usize,
    text: &str,
    ends: impl Fn(usize) -> bool,
) -> Option<&'a str> {
    let all = headings(source);
    let idx = all
        .iter()
        .position(|h| h.level == level && h.text == text)?;
    let body = all[idx].body;
    let end = all[idx + 1..]
        .iter()
        .find(|h| ends(h.level))
        .map_or(source.len(), |h| h.start);
    Some(&source[body..end])
}

/// Body of the first heading titled `text` at any level.
#[must_use]
pub fn subsection<'a>(span: &'a str, text: &str) -> Option<&'a str> {
    let level = headings(span).iter().find(|h| h.text == text)?.level;
    find_block(span, level, text)
}

/// Locate a top-level section, `None` when its heading is absent.
///
/// The section runs to the next level-2 heading. Level-1 lines inside it
/// (`# of hires`) are content.
#[must_use]
pub fn find_section<'a>(doc: &'a str, name: &str) -> Option<&'a str> {
    block(doc, SECTION_LEVEL, name, |next| next == SECTION_LEVEL)
}

/// Text strictly between the `## name` heading line and the next heading of
/// the same level, or `""` when the section is absent.
#[must_use]
pub fn section<'a>(doc: &'a str, name: &str) -> &'a str {
    find_section(doc, name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_at_document_start() {
        let doc = "## Identity\n**Name:** Ada\n## Skills\n- Rust\n";
        assert_eq!(section(doc, "Identity"), "**Name:** Ada\n");
    }

    #[test]
    fn section_mid_document_runs_to_end() {
        let doc = "# Profile\n\n## Identity\nx\n\n## Skills\n### Technical\n- Rust\n";
        assert_eq!(section(doc, "Skills"), "### Technical\n- Rust\n");
    }

    #[test]
    fn subsections_stay_inside_section() {
        let doc = "## Thesis & Implications\n### Implications\n- a\n## Skills\n";
        assert_eq!(section(doc, "Thesis & Implications"), "### Implications\n- a\n");
    }

    #[test]
    fn missing_section_is_empty() {
        let doc = "## Identity\n**Name:** Ada\n";
        assert_eq!(section(doc, "Skills"), "");
        assert!(find_section(doc, "Skills").is_none());
    }

    #[test]
    fn present_but_empty_section() {
        let doc = "## Skills\n## Identity\n";
        assert_eq!(find_section(doc, "Skills"), Some(""));
    }

    #[test]
    fn heading_text_must_match_exactly() {
        let doc = "## Skills Extra\n- a\n## Skills\n- b\n";
        assert_eq!(section(doc, "Skills"), "- b\n");
    }

    #[test]
    fn level_one_line_stays_in_section() {
        let doc = "## Experience\nGrew the team\n# of hires tripled\n## Skills\n";
        assert_eq!(section(doc, "Experience"), "Grew the team\n# of hires tripled\n");
    }

    #[test]
    fn block_at_level_three() {
        let span = "### What I Offer\nA\n#### Detail\nB\n### Next\nC\n";
        assert_eq!(find_block(span, 3, "What I Offer"), Some("A\n#### Detail\nB\n"));
    }

    #[test]
    fn subsection_any_level() {
        let span = "intro\n#### What I Offer\nA\n### Next\nC\n";
        assert_eq!(subsection(span, "What I Offer"), Some("A\n"));
        assert_eq!(subsection(span, "Missing"), None);
    }

    #[test]
    fn heading_offsets() {
        let doc = "# T\n\n## A\nbody\n";
        let found = headings(doc);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].start, 5);
        assert_eq!(found[1].body, 10);
        assert_eq!(found[1].text, "A");
    }
}
