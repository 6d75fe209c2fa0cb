//! Text normalization and line predicates shared by every extractor.
//!
//! Values in a template are hand-edited, so cleaning is deliberately narrow:
//! it removes `<!-- ... -->` annotation spans, trims, and folds line breaks
//! into single spaces. It never reorders or drops other content.

use std::sync::LazyLock;

use regex::Regex;

/// Opening delimiter of an annotation (placeholder hint) span.
pub const ANNOTATION_OPEN: &str = "<!--";
/// Closing delimiter of an annotation span.
pub const ANNOTATION_CLOSE: &str = "-->";

static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid annotation regex"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*$").expect("valid heading regex"));
static FIELD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*]\s+)?\*\*[^*\n]+:\*\*").expect("valid field line regex")
});
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip complete annotation spans, trim every line and join the remaining
/// non-empty lines with a single space.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let stripped = ANNOTATION_RE.replace_all(raw, "");
    stripped
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a value and treat leftover placeholder text as unset.
///
/// A value whose text still carries an annotation delimiter after cleaning
/// (typically a hint comment cut off by a field or line boundary) is empty.
#[must_use]
pub fn clean_value(raw: &str) -> String {
    let cleaned = clean_text(raw);
    if is_placeholder(&cleaned) {
        String::new()
    } else {
        cleaned
    }
}

/// True when `text` contains either annotation delimiter.
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    text.contains(ANNOTATION_OPEN) || text.contains(ANNOTATION_CLOSE)
}

/// Parse a markdown heading line into `(level, text)`.
#[must_use]
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line.trim())?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((level, text))
}

#[must_use]
pub fn is_heading(line: &str) -> bool {
    heading(line).is_some()
}

/// Horizontal rule: three or more of the same `-`, `*` or `_` character.
#[must_use]
pub fn is_rule(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|&glyph| compact.chars().all(|c| c == glyph))
}

/// Line that opens a labeled field, bare (`**Label:**`) or bulleted
/// (`- **Label:**`).
#[must_use]
pub fn is_field_line(line: &str) -> bool {
    FIELD_LINE_RE.is_match(line)
}

/// Text of a bullet item (`- item` or `* item`), without the glyph.
///
/// A bare glyph counts as an empty item. Rules such as `---` are not bullets.
#[must_use]
pub fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if is_rule(trimmed) {
        return None;
    }
    match trimmed {
        "-" | "*" => Some(""),
        _ => trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
            .map(str::trim),
    }
}

#[must_use]
pub fn is_pipe_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Normalize a table header cell into a record key: `Organization Type`
/// becomes `organization_type`.
#[must_use]
pub fn header_key(cell: &str) -> String {
    WHITESPACE_RE
        .replace_all(&clean_text(cell), "_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_annotation_and_folds_lines() {
        let raw = "  Builds teams <!-- keep it short -->\n   that ship.\n\n";
        assert_eq!(clean_text(raw), "Builds teams that ship.");
    }

    #[test]
    fn clean_strips_multiline_annotation() {
        let raw = "<!--\n  hint spanning\n  lines\n-->VP Engineering";
        assert_eq!(clean_text(raw), "VP Engineering");
    }

    #[test]
    fn clean_keeps_inner_spacing_and_order() {
        assert_eq!(clean_text("a  b\nc"), "a  b c");
    }

    #[test]
    fn placeholder_only_value_is_empty() {
        assert_eq!(clean_value("<!-- Your full name -->"), "");
    }

    #[test]
    fn unterminated_annotation_is_placeholder() {
        assert_eq!(clean_value("<!-- e.g. VP of"), "");
        assert_eq!(clean_value("Engineering -->"), "");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(heading("## Identity"), Some((2, "Identity")));
        assert_eq!(heading("### Role 1 (Most Recent)  "), Some((3, "Role 1 (Most Recent)")));
        assert_eq!(heading("#hashtag"), None);
        assert_eq!(heading("plain"), None);
    }

    #[test]
    fn rules() {
        assert!(is_rule("---"));
        assert!(is_rule("* * *"));
        assert!(is_rule("_____"));
        assert!(!is_rule("--"));
        assert!(!is_rule("- item"));
    }

    #[test]
    fn field_lines() {
        assert!(is_field_line("**Title:** VP"));
        assert!(is_field_line("- **Title:** VP"));
        assert!(is_field_line("* **Title:**"));
        assert!(!is_field_line("**Bold** prose"));
        assert!(!is_field_line("Title: VP"));
    }

    #[test]
    fn bullets() {
        assert_eq!(bullet_text("- Rust"), Some("Rust"));
        assert_eq!(bullet_text("  * Go "), Some("Go"));
        assert_eq!(bullet_text("-"), Some(""));
        assert_eq!(bullet_text("---"), None);
        assert_eq!(bullet_text("**Bold:**"), None);
        assert_eq!(bullet_text("text"), None);
    }

    #[test]
    fn header_keys() {
        assert_eq!(header_key(" Organization Type "), "organization_type");
        assert_eq!(header_key("Stat"), "stat");
        assert_eq!(header_key("Why  It\tMatters"), "why_it_matters");
    }
}
