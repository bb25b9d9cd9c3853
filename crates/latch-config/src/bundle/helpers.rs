use std::path::PathBuf;

use crate::bundle::plugins::{
    CommonJsOptions, JsonOptions, NodePolyfillOptions, PluginSpec, ResolveOptions,
    TranspileOptions,
};

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entry() -> PathBuf {
    PathBuf::from("src/index.js")
}

pub(crate) fn default_output_file() -> PathBuf {
    PathBuf::from("dist/bundle.esm.js")
}

pub(crate) fn default_extensions() -> Vec<String> {
    vec![
        ".mjs".to_string(),
        ".js".to_string(),
        ".json".to_string(),
        ".node".to_string(),
    ]
}

pub(crate) fn default_main_fields() -> Vec<String> {
    vec!["module".to_string(), "main".to_string()]
}

pub(crate) fn default_transpile_exclude() -> Vec<String> {
    vec!["node_modules/**".to_string()]
}

/// The stock pipeline: polyfill, resolve for the browser, transpile with
/// bundled helpers, interop CommonJS modules, allow JSON imports.
pub(crate) fn default_plugins() -> Vec<PluginSpec> {
    vec![
        PluginSpec::NodePolyfills(NodePolyfillOptions::default()),
        PluginSpec::Resolve(ResolveOptions {
            browser: true,
            ..ResolveOptions::default()
        }),
        PluginSpec::Transpile(TranspileOptions::default()),
        PluginSpec::CommonJs(CommonJsOptions {
            transform_mixed_es_modules: true,
            ..CommonJsOptions::default()
        }),
        PluginSpec::Json(JsonOptions::default()),
    ]
}
