//! Show operation: render one record envelope without writing files.

use std::path::Path;

use super::document::read_document;
use crate::error::{ProfileError, Result};
use crate::publish::{render_envelope, PublishOptions, INDEX_ENDPOINT};
use crate::template::{parse_document, schema};

/// Render the envelope for `endpoint` (or the directory for `index`).
pub fn show(path: &Path, endpoint: &str, opts: &PublishOptions) -> Result<String> {
    if endpoint != INDEX_ENDPOINT && schema::spec_for(endpoint).is_none() {
        return Err(ProfileError::UnknownEndpoint {
            name: endpoint.to_string(),
        });
    }

    let records = parse_document(&read_document(path)?);
    if endpoint == INDEX_ENDPOINT {
        return render_envelope(INDEX_ENDPOINT, &records.directory, opts);
    }
    let record = records
        .get(endpoint)
        .ok_or_else(|| ProfileError::EmptyEndpoint {
            name: endpoint.to_string(),
        })?;
    render_envelope(endpoint, record, opts)
}
