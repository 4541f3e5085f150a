use std::fs;
use std::path::Path;

use crate::error::ImportError;

/// Reads the whole dictionary file. Invalid UTF-8 surfaces as an I/O error.
pub fn load(path: &Path) -> Result<String, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}
