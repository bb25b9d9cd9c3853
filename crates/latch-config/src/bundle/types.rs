use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Module format of the emitted bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ECMAScript modules (import/export syntax)
    #[default]
    Esm,
    /// CommonJS modules (require/module.exports)
    Cjs,
    /// Immediately Invoked Function Expression, for script tags
    Iife,
}

impl OutputFormat {
    /// Stable wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
            Self::Iife => "iife",
        }
    }

    /// Whether the runner requires a global variable name for this format.
    pub fn requires_name(self) -> bool {
        matches!(self, Self::Iife)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map generation mode.
///
/// Absent entirely (the default) means no source maps are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    /// Source map embedded in the bundle as a base64 data URL
    Inline,
    /// Separate .map file next to the bundle
    External,
    /// .map file is written but not referenced from the bundle
    Hidden,
}

/// How the transpilation stage provides its runtime helper functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HelperMode {
    /// Helpers are emitted once into the bundle itself
    #[default]
    Bundled,
    /// Helpers are imported from a runtime helper package
    Runtime,
    /// Helpers are referenced as pre-existing globals
    External,
    /// Helpers are inlined at every use site
    Inline,
}

impl HelperMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Runtime => "runtime",
            Self::External => "external",
            Self::Inline => "inline",
        }
    }
}
