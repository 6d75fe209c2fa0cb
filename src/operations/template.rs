//! Template operation: write the blank profile document.

use std::path::Path;

use serde::Serialize;

use crate::error::{ProfileError, Result};
use crate::template::blank::render_blank_template;
use crate::template::schema::SCHEMA;

/// Result of writing the template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateResult {
    pub path: String,
    pub sections: usize,
}

/// Write the blank template to `path`, refusing to overwrite unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<TemplateResult> {
    if path.exists() && !force {
        return Err(ProfileError::OutputExists {
            path: path.display().to_string(),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_blank_template())?;

    Ok(TemplateResult {
        path: path.display().to_string(),
        sections: SCHEMA.len(),
    })
}
