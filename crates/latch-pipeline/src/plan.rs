//! The fully-resolved record handed to the external bundler runner.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use latch_config::{OutputFormat, SourceMapMode};

use crate::error::Result;

/// A bundler invocation, fully resolved: absolute paths, every default
/// filled in, plugin activations in pipeline order with canonical option
/// bags. Serialized as JSON, this is the shape the runner consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlePlan {
    /// Absolute path of the root module
    pub entry: PathBuf,

    pub output: PlannedOutput,

    /// Module specifiers the runner must leave unresolved
    pub external: Vec<String>,

    /// Pipeline order is the vector order
    pub plugins: Vec<PlannedPlugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedOutput {
    /// Absolute path of the bundle to write
    pub file: PathBuf,

    pub format: OutputFormat,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<SourceMapMode>,
}

/// One plugin activation as the runner sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedPlugin {
    pub name: String,

    /// Canonical option bag; key order is the emission order
    #[serde(default)]
    pub options: IndexMap<String, Value>,
}

impl BundlePlan {
    /// Stable, human-readable JSON emission.
    pub fn to_json(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Names of the planned activations, in pipeline order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }
}
