use std::path::Path;

use crate::error::{ProfileError, Result};

/// Read the profile document.
///
/// A missing path is reported as [`ProfileError::InputNotFound`], distinct
/// from a document that exists but has no usable content.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ProfileError::InputNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
