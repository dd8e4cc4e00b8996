//! Settings file loading

use super::schema::SettingsSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Settings wrapper
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub schema: SettingsSchema,
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file path, a standard location, or use defaults.
    ///
    /// An explicit path that does not exist is an error; a missing file in
    /// the standard locations is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_settings_file(),
        };

        let schema = if let Some(ref p) = settings_path {
            load_settings_file(p)?
        } else {
            SettingsSchema::default()
        };

        Ok(Self {
            schema,
            path: settings_path,
        })
    }
}

/// Find a settings file in standard locations
fn find_settings_file() -> Option<PathBuf> {
    let candidates = [
        ".preset-validator.toml",
        "preset-validator.toml",
        ".config/preset-validator.toml",
    ];

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Load and parse a TOML settings file
fn load_settings_file(path: &Path) -> Result<SettingsSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::settings(format!(
            "Failed to read settings file {}: {}",
            path.display(),
            e
        ))
        .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("While loading {}", path.display()))
    })
}
