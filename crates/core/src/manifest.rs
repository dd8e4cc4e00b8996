//! Preset discovery from the package manifest
//!
//! The presets that get validated are exactly the ones the package publishes:
//! string values of the manifest's `exports` table that end in the preset
//! extension. Keys are import-path aliases and play no part.

use crate::error::{Error, Result};
use crate::file_scanner::normalize_path;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read the manifest at `manifest_path` and return the absolute paths of
/// every exported file ending in `extension`, in `exports` order.
///
/// # Errors
///
/// Fails with a manifest error when the file cannot be read, is not valid
/// JSON, or has no `exports` object. An empty `exports` object is fine and
/// yields no files.
pub fn discover_config_files(manifest_path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let manifest_path = std::path::absolute(manifest_path)
        .map_err(|e| Error::manifest_unreadable(manifest_path).with_source(e))?;

    let content = std::fs::read_to_string(&manifest_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::manifest_not_found(&manifest_path).with_source(e),
        _ => Error::manifest_unreadable(&manifest_path).with_source(e),
    })?;

    let manifest: Value = serde_json::from_str(&content)
        .map_err(|e| Error::manifest_parse(&manifest_path).with_source(e))?;

    let exports = manifest
        .get("exports")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::missing_exports(&manifest_path))?;

    let package_dir = manifest_path.parent().unwrap_or(Path::new("/"));

    let mut files = Vec::new();
    for (key, value) in exports {
        let Some(relative) = value.as_str() else {
            debug!(export = %key, "skipping non-string export");
            continue;
        };
        if !relative.ends_with(extension) {
            continue;
        }
        files.push(normalize_path(&package_dir.join(relative)));
    }

    debug!(
        manifest = %manifest_path.display(),
        count = files.len(),
        "discovered presets"
    );

    Ok(files)
}
