//! Core build configuration types shared across latch crates.

mod helpers;
mod plugins;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use plugins::{
    CommonJsOptions, CustomPlugin, JsonOptions, NodePolyfillOptions, PluginSpec, ResolveOptions,
    Stage, TranspileOptions,
};
pub use types::{HelperMode, OutputFormat, SourceMapMode};

use helpers::{default_entry, default_output_file, default_plugins};

/// The build configuration: one entry module, one output descriptor and an
/// ordered plugin pipeline.
///
/// Constructed once (from a file or a literal), read once by the runner,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Root module the runner starts dependency traversal from
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Output descriptor
    #[serde(default)]
    pub output: OutputOptions,

    /// Module specifiers left unresolved, imported at runtime instead
    #[serde(default)]
    pub external: Vec<String>,

    /// Ordered transformation pipeline. Order is significant.
    #[serde(default = "default_plugins")]
    pub plugins: Vec<PluginSpec>,
}

impl BundleOptions {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use latch_config::BundleOptions;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let options = BundleOptions::from_value(json!({
    ///     "entry": "src/main.js",
    ///     "output": { "file": "dist/main.js", "format": "esm" }
    /// })).unwrap();
    /// assert_eq!(options.entry, PathBuf::from("src/main.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle".to_string(),
            hint: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle".to_string(),
            hint: e.to_string(),
        })
    }

    /// The built-in plugin activation for `stage`, if present.
    pub fn plugin_for(&self, stage: Stage) -> Option<&PluginSpec> {
        self.plugins.iter().find(|p| p.stage() == Some(stage))
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            output: OutputOptions::default(),
            external: vec![],
            plugins: default_plugins(),
        }
    }
}

/// Where and in which module format the bundle is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Destination path of the bundle
    #[serde(default = "default_output_file")]
    pub file: PathBuf,

    /// Module format of the emitted bundle
    #[serde(default)]
    pub format: OutputFormat,

    /// Global variable name, required by the iife format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source map generation; absent means none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<SourceMapMode>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            format: OutputFormat::Esm,
            name: None,
            sourcemap: None,
        }
    }
}
