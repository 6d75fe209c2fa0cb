//! Field, list and table extractors.
//!
//! Each extractor takes a span (usually a section body) and an introducing
//! marker, and returns cleaned values. Missing markers and malformed content
//! degrade to empty results; nothing here fails.

use tracing::debug;

use super::boundary::next_boundary;
use super::sections::headings;
use super::text::{
    bullet_text, clean_value, header_key, is_field_line, is_heading, is_pipe_row, is_rule,
    ANNOTATION_CLOSE, ANNOTATION_OPEN,
};
use crate::models::record::TableRow;

/// What introduces a list or table inside a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// A heading line with this exact text, at any level.
    Heading(&'a str),
    /// A bold label, `**Label:**`.
    Label(&'a str),
}

impl Marker<'_> {
    /// Byte offset of the line following the marker line.
    #[must_use]
    pub fn body_start(&self, span: &str) -> Option<usize> {
        let line_start = match self {
            Marker::Heading(text) => headings(span)
                .into_iter()
                .find(|h| h.text == *text)
                .map(|h| h.start)?,
            Marker::Label(label) => span.find(&label_marker(label))?,
        };
        let body = span[line_start..]
            .find('\n')
            .map_or(span.len(), |nl| line_start + nl + 1);
        Some(body)
    }
}

/// The exact delimited marker for a labeled field.
#[must_use]
pub fn label_marker(label: &str) -> String {
    format!("**{label}:**")
}

/// Cleaned value of the first `**label:**` field in `span`, or `""`.
///
/// The value runs to the nearest field marker, heading, horizontal rule or
/// end of span.
#[must_use]
pub fn field(span: &str, label: &str) -> String {
    let marker = label_marker(label);
    let Some(pos) = span.find(&marker) else {
        return String::new();
    };
    let rest = &span[pos + marker.len()..];
    let (end, _) = next_boundary(rest);
    clean_value(&rest[..end])
}

/// Bullet items that follow `marker`, in document order.
///
/// Before the first bullet, blank lines, annotation comments and introductory
/// prose are skipped, while a heading, rule or field line ends the search.
/// Once a bullet has been seen, the first non-bullet line ends the list.
/// Empty and placeholder items are dropped.
#[must_use]
pub fn list(span: &str, marker: Marker<'_>) -> Vec<String> {
    let Some(start) = marker.body_start(span) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut seen_bullet = false;
    let mut in_annotation = false;

    for line in span[start..].lines() {
        if is_field_line(line) {
            break;
        }
        if seen_bullet {
            let Some(text) = bullet_text(line) else {
                break;
            };
            push_item(&mut items, text);
            continue;
        }

        if in_annotation {
            in_annotation = !line.contains(ANNOTATION_CLOSE);
            continue;
        }
        if is_heading(line) || is_rule(line) {
            break;
        }
        let trimmed = line.trim();
        if trimmed.starts_with(ANNOTATION_OPEN) {
            in_annotation = !trimmed.contains(ANNOTATION_CLOSE);
            continue;
        }
        if let Some(text) = bullet_text(line) {
            seen_bullet = true;
            push_item(&mut items, text);
        }
    }

    items
}

fn push_item(items: &mut Vec<String>, text: &str) {
    let item = clean_value(text);
    if !item.is_empty() {
        items.push(item);
    }
}

/// Distinct keys for a header row. Empty cells become `column_N` and repeats
/// of an earlier key get a `_N` suffix.
fn header_keys(header: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for (i, cell) in split_cells(header).iter().enumerate() {
        let base = header_key(cell);
        let base = if base.is_empty() {
            format!("column_{}", i + 1)
        } else {
            base
        };
        let mut key = base.clone();
        let mut n = 2;
        while keys.contains(&key) {
            key = format!("{base}_{n}");
            n += 1;
        }
        keys.push(key);
    }
    keys
}

/// Rows of the first pipe table after `marker`.
///
/// The line after the header is skipped as the separator without being
/// checked. Short rows are padded with empty cells; rows whose cells are all
/// empty (placeholders included) are dropped.
#[must_use]
pub fn table(span: &str, marker: Marker<'_>) -> Vec<TableRow> {
    let Some(start) = marker.body_start(span) else {
        return Vec::new();
    };
    let mut lines = span[start..].lines();

    let mut header = None;
    for line in lines.by_ref() {
        if is_pipe_row(line) {
            header = Some(line);
            break;
        }
        if is_heading(line) || is_rule(line) {
            break;
        }
    }
    let Some(header) = header else {
        debug!(?marker, "no table header found");
        return Vec::new();
    };

    let keys = header_keys(header);

    // Separator row
    lines.next();

    let mut rows = Vec::new();
    for line in lines {
        if !is_pipe_row(line) {
            break;
        }
        let cells = split_cells(line);
        let row = TableRow::new(
            keys.iter()
                .enumerate()
                .map(|(i, key)| {
                    let value = cells.get(i).map(|c| clean_value(c)).unwrap_or_default();
                    (key.clone(), value)
                })
                .collect(),
        );
        if row.is_empty() {
            debug!(?marker, "dropping empty table row");
        } else {
            rows.push(row);
        }
    }

    rows
}

/// Split a pipe row into raw cells, discarding the outer empty cells created
/// by leading and trailing pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}
