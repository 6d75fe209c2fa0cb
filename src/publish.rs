//! Envelope wrapping and writing of record files.
//!
//! Each non-empty record becomes `<endpoint>.json`; `index.json` lists them.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::error::{ProfileError, Result};
use crate::models::record::ProfileRecords;
use crate::template::schema;

/// Endpoint name of the directory record.
pub const INDEX_ENDPOINT: &str = "index";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Metadata carried by every published file.
#[derive(Debug, Clone, Serialize)]
pub struct Meta<'a> {
    pub version: &'a str,
    pub last_updated: String,
    pub endpoint: &'a str,
}

/// A record wrapped with its metadata.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub meta: Meta<'a>,
    pub data: &'a T,
}

/// How envelopes are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    pub version: String,
    pub last_updated: NaiveDate,
    pub pretty: bool,
}

impl PublishOptions {
    #[must_use]
    pub fn new(version: impl Into<String>, last_updated: NaiveDate, pretty: bool) -> Self {
        Self {
            version: version.into(),
            last_updated,
            pretty,
        }
    }
}

/// Today's date in local time.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ProfileError::InvalidDate {
        value: value.to_string(),
    })
}

/// Serialize `data` inside an envelope for `endpoint`.
pub fn render_envelope<T: Serialize>(
    endpoint: &str,
    data: &T,
    opts: &PublishOptions,
) -> Result<String> {
    let envelope = Envelope {
        meta: Meta {
            version: &opts.version,
            last_updated: opts.last_updated.format(DATE_FORMAT).to_string(),
            endpoint,
        },
        data,
    };
    let mut json = if opts.pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    json.push('\n');
    Ok(json)
}

/// Write every record plus the directory into `out_dir`.
///
/// Files left over from endpoints that are now empty are removed. Returns
/// the written paths, records first and the directory last.
pub fn write_records(
    records: &ProfileRecords,
    out_dir: &Path,
    opts: &PublishOptions,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(records.records.len() + 1);

    for record in &records.records {
        let path = endpoint_path(out_dir, record.endpoint);
        std::fs::write(&path, render_envelope(record.endpoint, record, opts)?)?;
        info!(path = %path.display(), "wrote record");
        written.push(path);
    }

    for endpoint in schema::endpoints() {
        if records.get(endpoint).is_none() {
            let stale = endpoint_path(out_dir, endpoint);
            if stale.exists() {
                std::fs::remove_file(&stale)?;
                info!(path = %stale.display(), "removed stale record");
            }
        }
    }

    let index = endpoint_path(out_dir, INDEX_ENDPOINT);
    std::fs::write(
        &index,
        render_envelope(INDEX_ENDPOINT, &records.directory, opts)?,
    )?;
    info!(path = %index.display(), "wrote directory");
    written.push(index);

    Ok(written)
}

fn endpoint_path(out_dir: &Path, endpoint: &str) -> PathBuf {
    out_dir.join(format!("{endpoint}.json"))
}
