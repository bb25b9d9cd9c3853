//! Plugin pipeline specifications.
//!
//! A plugin is a named transformation stage the external runner applies
//! during its pipeline, configured through an option bag. The order of
//! [`PluginSpec`] values in `BundleOptions::plugins` IS the pipeline order
//! and is preserved through loading, profile overlays and plan emission.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::helpers::{
    default_extensions, default_main_fields, default_transpile_exclude, default_true,
};
use crate::bundle::types::HelperMode;

/// One activation in the plugin pipeline.
///
/// The built-in variants cover the stages latch has typed options for;
/// anything else the runner supports goes through [`PluginSpec::Custom`]
/// with a raw option bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum PluginSpec {
    /// Shim Node.js built-ins (buffer, process, events, ...) for browser output
    #[serde(rename = "node-polyfills")]
    NodePolyfills(NodePolyfillOptions),

    /// Locate bare import specifiers in node_modules
    #[serde(rename = "resolve")]
    Resolve(ResolveOptions),

    /// Source-to-source transpilation to the target syntax
    #[serde(rename = "transpile")]
    Transpile(TranspileOptions),

    /// Convert CommonJS modules so they can be imported from ESM
    #[serde(rename = "commonjs")]
    CommonJs(CommonJsOptions),

    /// Allow importing .json files as modules
    #[serde(rename = "json")]
    Json(JsonOptions),

    /// A runner plugin latch has no typed options for
    #[serde(untagged)]
    Custom(CustomPlugin),
}

impl PluginSpec {
    /// Stable wire name of this activation.
    pub fn name(&self) -> &str {
        match self {
            Self::NodePolyfills(_) => "node-polyfills",
            Self::Resolve(_) => "resolve",
            Self::Transpile(_) => "transpile",
            Self::CommonJs(_) => "commonjs",
            Self::Json(_) => "json",
            Self::Custom(custom) => &custom.name,
        }
    }

    /// Canonical pipeline phase, `None` for custom plugins.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::NodePolyfills(_) => Some(Stage::Polyfill),
            Self::Resolve(_) => Some(Stage::Resolve),
            Self::Transpile(_) => Some(Stage::Transpile),
            Self::CommonJs(_) => Some(Stage::Interop),
            Self::Json(_) => Some(Stage::Assets),
            Self::Custom(_) => None,
        }
    }

    /// The option bag as canonical JSON, without the `name` tag.
    pub fn option_bag(&self) -> Value {
        if let Self::Custom(custom) = self {
            return custom.options.clone();
        }
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => {
                map.remove("name");
                Value::Object(map)
            }
            Ok(other) => other,
            Err(_) => Value::Null,
        }
    }
}

/// Canonical pipeline phases of the built-in plugins.
///
/// Ranks matter: polyfilling happens before resolution, resolution before
/// transpilation, transpilation before CommonJS interop, interop before
/// asset handling. A configuration that lists built-in plugins against
/// this order would make the runner produce different output, so
/// validation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Polyfill,
    Resolve,
    Transpile,
    Interop,
    Assets,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Polyfill => "polyfill",
            Self::Resolve => "resolve",
            Self::Transpile => "transpile",
            Self::Interop => "interop",
            Self::Assets => "assets",
        }
    }
}

/// Options for the Node.js polyfill stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NodePolyfillOptions {
    /// Inject globals (process, Buffer, global) where they are referenced
    #[serde(default = "default_true")]
    pub include_globals: bool,

    /// Rewrite `node:`-prefixed imports to their polyfills
    #[serde(default = "default_true")]
    pub protocol_imports: bool,
}

impl Default for NodePolyfillOptions {
    fn default() -> Self {
        Self {
            include_globals: true,
            protocol_imports: true,
        }
    }
}

/// Options for the module resolution stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolveOptions {
    /// Honor the `browser` package.json field and browser-specific entry points
    #[serde(default)]
    pub browser: bool,

    /// Prefer Node.js built-ins over identically named packages
    #[serde(default = "default_true")]
    pub prefer_builtins: bool,

    /// Extensions tried, in order, when a specifier has none
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// package.json fields consulted for the package entry point, in order
    #[serde(default = "default_main_fields")]
    pub main_fields: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            browser: false,
            prefer_builtins: true,
            extensions: default_extensions(),
            main_fields: default_main_fields(),
        }
    }
}

/// Options for the transpilation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranspileOptions {
    /// Where transpilation helper functions come from
    #[serde(default)]
    pub helpers: HelperMode,

    /// Glob patterns never transpiled
    #[serde(default = "default_transpile_exclude")]
    pub exclude: Vec<String>,

    /// Emit intermediate source maps for downstream stages
    #[serde(default = "default_true")]
    pub sourcemaps: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            helpers: HelperMode::Bundled,
            exclude: default_transpile_exclude(),
            sourcemaps: true,
        }
    }
}

/// Options for the CommonJS interop stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CommonJsOptions {
    /// Also convert modules that mix `require` with import/export syntax
    #[serde(default)]
    pub transform_mixed_es_modules: bool,

    /// Glob patterns of modules to convert (empty: all CommonJS modules)
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns of modules left untouched
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Leave `require` calls with non-literal arguments as-is
    #[serde(default)]
    pub ignore_dynamic_requires: bool,
}

/// Options for the JSON import stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JsonOptions {
    /// Generate `const` declarations instead of `var`
    #[serde(default)]
    pub prefer_const: bool,

    /// Generate a named export per top-level key
    #[serde(default = "default_true")]
    pub named_exports: bool,

    /// Emit minified JSON modules
    #[serde(default)]
    pub compact: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            prefer_const: false,
            named_exports: true,
            compact: false,
        }
    }
}

/// A plugin activation latch has no typed options for.
///
/// The option bag is forwarded to the runner verbatim, the same way the
/// typed bags are, so custom plugins participate in equivalence checks
/// and plan emission without special cases downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPlugin {
    /// Runner-side plugin name
    pub name: String,

    /// Raw option bag forwarded during plugin construction
    #[serde(default)]
    pub options: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_round_trips_through_json() {
        let spec = PluginSpec::Resolve(ResolveOptions {
            browser: true,
            ..ResolveOptions::default()
        });
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["name"], "resolve");
        assert_eq!(value["browser"], true);

        let back: PluginSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn unknown_name_becomes_custom() {
        let spec: PluginSpec = serde_json::from_value(serde_json::json!({
            "name": "terser",
            "options": { "compress": true }
        }))
        .unwrap();

        assert_eq!(spec.name(), "terser");
        assert_eq!(spec.stage(), None);
        assert_eq!(spec.option_bag()["compress"], true);
    }

    #[test]
    fn option_bag_strips_the_name_tag() {
        let spec = PluginSpec::CommonJs(CommonJsOptions {
            transform_mixed_es_modules: true,
            ..CommonJsOptions::default()
        });
        let bag = spec.option_bag();
        assert!(bag.get("name").is_none());
        assert_eq!(bag["transform_mixed_es_modules"], true);
    }

    #[test]
    fn stages_rank_in_pipeline_order() {
        assert!(Stage::Polyfill < Stage::Resolve);
        assert!(Stage::Resolve < Stage::Transpile);
        assert!(Stage::Transpile < Stage::Interop);
        assert!(Stage::Interop < Stage::Assets);
    }

    #[test]
    fn commonjs_defaults_are_conservative() {
        let opts = CommonJsOptions::default();
        assert!(!opts.transform_mixed_es_modules);
        assert!(opts.include.is_empty());
        assert!(!opts.ignore_dynamic_requires);
    }
}
