use tracing::debug;

use super::compound::{offers, roles};
use super::extract::{field, list, table};
use super::schema::{spec_for, Expect, SectionSpec, SCHEMA};
use super::sections::{find_section, subsection};
use crate::models::record::{Directory, DirectoryEntry, ProfileRecords, Record, Value};

/// Display name used when the identity record has no name.
pub const FALLBACK_NAME: &str = "Profile";

/// Parse a whole profile document into its non-empty records.
///
/// Never fails: absent sections, fields, lists and tables degrade to empty
/// values, and records left with no data are omitted.
#[must_use]
pub fn parse_document(doc: &str) -> ProfileRecords {
    let mut records: Vec<Record> = SCHEMA
        .iter()
        .filter_map(|spec| {
            let Some(span) = find_section(doc, spec.heading) else {
                debug!(section = spec.heading, "section absent");
                return None;
            };
            let record = extract_section(spec, span);
            if record.is_empty() {
                debug!(section = spec.heading, "section has no usable data");
                None
            } else {
                Some(record)
            }
        })
        .collect();

    resolve_mirrors(&mut records);
    let directory = build_directory(&records);

    ProfileRecords { records, directory }
}

/// Run every expectation of `spec` against one section body.
///
/// Mirrors are left empty here; they are filled once all records exist.
#[must_use]
pub fn extract_section(spec: &SectionSpec, span: &str) -> Record {
    let mut record = Record::new(spec.endpoint);

    for item in spec.items {
        match *item {
            Expect::Field { key, label, .. } => record.push(key, Value::Text(field(span, label))),
            Expect::List { key, marker, .. } => record.push(key, Value::List(list(span, marker))),
            Expect::Table { key, marker, .. } => {
                record.push(key, Value::Table(table(span, marker)));
            }
            Expect::Offers { key, heading } => {
                let found = subsection(span, heading).map(offers).unwrap_or_default();
                record.push(key, Value::Offers(found));
            }
            Expect::Roles { key } => record.push(key, Value::Roles(roles(span))),
            Expect::Mirror {
                key,
                endpoint,
                source,
            } => record.push_mirror(key, empty_value_of(endpoint, source)),
        }
    }

    record
}

/// Copy mirrored values from their source records.
///
/// A mirror whose source record was omitted stays empty.
fn resolve_mirrors(records: &mut [Record]) {
    let mut fills = Vec::new();

    for (ri, record) in records.iter().enumerate() {
        let Some(spec) = spec_for(record.endpoint) else {
            continue;
        };
        for (ei, item) in spec.items.iter().enumerate() {
            if let Expect::Mirror {
                endpoint, source, ..
            } = *item
            {
                let value = records
                    .iter()
                    .find(|r| r.endpoint == endpoint)
                    .and_then(|r| r.get(source));
                if let Some(value) = value {
                    fills.push((ri, ei, value.clone()));
                }
            }
        }
    }

    for (ri, ei, value) in fills {
        records[ri].entries[ei].value = value;
    }
}

/// Empty value with the same shape as `endpoint.source`.
fn empty_value_of(endpoint: &str, source: &str) -> Value {
    let item = spec_for(endpoint).and_then(|spec| spec.items.iter().find(|i| i.key() == source));
    match item {
        Some(Expect::Field { .. }) => Value::Text(String::new()),
        Some(Expect::Table { .. }) => Value::Table(Vec::new()),
        Some(Expect::Offers { .. }) => Value::Offers(Vec::new()),
        Some(Expect::Roles { .. }) => Value::Roles(Vec::new()),
        Some(Expect::List { .. } | Expect::Mirror { .. }) | None => Value::List(Vec::new()),
    }
}

fn build_directory(records: &[Record]) -> Directory {
    let name = records
        .iter()
        .find(|r| r.endpoint == "identity")
        .and_then(|r| r.get("name"))
        .and_then(Value::as_text)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string();

    let endpoints = records
        .iter()
        .filter_map(|r| spec_for(r.endpoint))
        .map(|spec| DirectoryEntry {
            endpoint: spec.endpoint,
            path: format!("/{}", spec.endpoint),
            description: spec.description,
        })
        .collect();

    Directory { name, endpoints }
}
