//! Build operation: parse the profile document and publish its records.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::document::read_document;
use crate::error::Result;
use crate::publish::{write_records, PublishOptions};
use crate::template::parse_document;

/// Inputs of a build, already resolved against the config.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub version: String,
    pub last_updated: NaiveDate,
    pub pretty: bool,
}

/// Result of a build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    /// Number of files written, directory included.
    pub files: usize,
    /// Endpoints that had data, in schema order.
    pub endpoints: Vec<&'static str>,
    /// Output directory.
    pub output: String,
}

/// Parse `request.input` and write one file per non-empty record plus the
/// directory. Nothing is written when the input cannot be read.
pub fn build(request: &BuildRequest) -> Result<BuildResult> {
    let doc = read_document(&request.input)?;
    let records = parse_document(&doc);
    let opts = PublishOptions::new(
        request.version.clone(),
        request.last_updated,
        request.pretty,
    );
    let written = write_records(&records, &request.output_dir, &opts)?;
    info!(files = written.len(), "build complete");

    Ok(BuildResult {
        files: written.len(),
        endpoints: records.endpoints(),
        output: request.output_dir.display().to_string(),
    })
}
