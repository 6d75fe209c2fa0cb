use super::text::{heading, is_field_line, is_rule};

/// Shallowest heading level that ends a field value. Shallower lines such as
/// `# of hires` stay part of the value.
pub const SUBSECTION_LEVEL: usize = 3;

/// The kind of line that terminates a field value.
///
/// Variant order is the precedence used when one line could qualify as more
/// than one kind. Adding a new section shape that needs its own terminator
/// means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Subsection heading, level 3 or deeper (`### Positioning`).
    Heading,
    /// Horizontal rule (`---`).
    Rule,
    /// Another labeled field, bare or bulleted.
    FieldMarker,
    /// End of the scanned text.
    End,
}

impl Boundary {
    /// Classify a full line, `None` when the line is ordinary content.
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        if heading(line).is_some_and(|(level, _)| level >= SUBSECTION_LEVEL) {
            Some(Self::Heading)
        } else if is_rule(line) {
            Some(Self::Rule)
        } else if is_field_line(line) {
            Some(Self::FieldMarker)
        } else {
            None
        }
    }
}

/// Find the earliest boundary in `text`.
///
/// `text` is the remainder of a marker line, so its first line is never a
/// boundary. Returns the byte offset of the newline that precedes the
/// boundary line (the value ends there) and the boundary kind. Without a
/// boundary the offset is `text.len()` and the kind is [`Boundary::End`].
#[must_use]
pub fn next_boundary(text: &str) -> (usize, Boundary) {
    let Some(mut newline) = text.find('\n') else {
        return (text.len(), Boundary::End);
    };

    loop {
        let rest = &text[newline + 1..];
        let line = rest.split('\n').next().unwrap_or_default();
        if let Some(kind) = Boundary::classify(line) {
            return (newline, kind);
        }
        match rest.find('\n') {
            Some(next) => newline += 1 + next,
            None => return (text.len(), Boundary::End),
        }
    }
}
