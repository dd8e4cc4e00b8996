//! Settings schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root settings schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsSchema {
    #[serde(default)]
    pub discovery: DiscoverySettings,

    #[serde(default)]
    pub runtime: RuntimeSettings,

    #[serde(default)]
    pub parser: ParserSettings,
}

/// Where presets are discovered from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// Package manifest path; the binary's built-in location when unset
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Suffix an export value must end with to be validated
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            manifest: None,
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    ".json".to_string()
}

/// Alternate runtime handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSettings {
    /// Base name identifying the alternate runtime preset
    #[serde(default = "default_alternate_file")]
    pub alternate_file: String,

    /// `compilerOptions.lib` entries removed before validating that preset
    #[serde(default = "default_filtered_libs")]
    pub filtered_libs: Vec<String>,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            alternate_file: default_alternate_file(),
            filtered_libs: default_filtered_libs(),
        }
    }
}

fn default_alternate_file() -> String {
    "deno.json".to_string()
}

fn default_filtered_libs() -> Vec<String> {
    vec!["Deno.NS", "deno.ns", "deno.window", "deno.worker"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Configuration parser behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParserSettings {
    /// Report configs whose `include` matches no input files
    #[serde(default)]
    pub report_no_inputs: bool,
}
