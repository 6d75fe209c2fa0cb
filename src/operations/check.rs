//! Completeness report: which sections are present, filled, and what is
//! still empty. Reads the document only; nothing is written.

use std::path::Path;

use serde::Serialize;

use super::document::read_document;
use crate::error::Result;
use crate::template::assemble::extract_section;
use crate::template::schema::SCHEMA;
use crate::template::sections::find_section;

/// Status of one section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStatus {
    pub section: &'static str,
    pub endpoint: &'static str,
    /// Heading found in the document.
    pub present: bool,
    /// At least one value has data, so the record will be published.
    pub filled: bool,
    /// Keys that came out empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub empty: Vec<&'static str>,
}

/// Result of checking a document.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub sections: Vec<SectionStatus>,
    /// Number of records a build would publish.
    pub filled: usize,
    pub total: usize,
}

/// Check the document at `path`.
pub fn check(path: &Path) -> Result<CheckResult> {
    let doc = read_document(path)?;
    Ok(check_document(&doc))
}

/// Check already-loaded document text.
#[must_use]
pub fn check_document(doc: &str) -> CheckResult {
    let sections: Vec<SectionStatus> = SCHEMA
        .iter()
        .map(|spec| {
            let span = find_section(doc, spec.heading);
            let record = extract_section(spec, span.unwrap_or_default());
            SectionStatus {
                section: spec.heading,
                endpoint: spec.endpoint,
                present: span.is_some(),
                filled: !record.is_empty(),
                empty: record.empty_keys(),
            }
        })
        .collect();

    CheckResult {
        filled: sections.iter().filter(|s| s.filled).count(),
        total: sections.len(),
        sections,
    }
}
