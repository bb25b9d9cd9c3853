//! Pluggable config validation strategies.
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use). Schema validation enforces the structural invariants
//! of the build configuration; filesystem validation additionally checks
//! that the paths it names exist on disk.

use std::path::Path;

use crate::bundle::{BundleOptions, PluginSpec, SourceMapMode, Stage};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks).
///
/// Use this for library use cases where files are in-memory or virtual.
///
/// # Example
///
/// ```
/// use latch_config::{BundleOptions, ConfigValidator, SchemaValidator};
///
/// let config = BundleOptions::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        if config.entry.as_os_str().is_empty() {
            return Err(ConfigError::EmptyEntry);
        }

        if config.output.file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }

        if config.output.format.requires_name() && config.output.name.is_none() {
            return Err(ConfigError::MissingField {
                field: "output.name".to_string(),
                hint: "iife output needs a global variable name".to_string(),
            });
        }

        for external in &config.external {
            if external.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "external module specifiers cannot be empty".to_string(),
                    hint: Some("remove empty strings from the 'external' array".to_string()),
                });
            }
        }

        validate_pipeline(&config.plugins)?;

        Ok(())
    }
}

/// The pipeline invariants: every activation well-formed, at most one
/// activation per built-in stage, built-in stages in canonical order.
fn validate_pipeline(plugins: &[PluginSpec]) -> Result<()> {
    // Built-in stages seen so far. Entries are only pushed in ascending
    // rank order, so the last one is the maximum.
    let mut seen: Vec<(Stage, &str)> = Vec::new();

    for plugin in plugins {
        match plugin {
            PluginSpec::Custom(custom) => {
                if custom.name.trim().is_empty() {
                    return Err(ConfigError::SchemaValidation {
                        message: "custom plugin name cannot be empty".to_string(),
                        hint: Some("give every plugin entry a 'name'".to_string()),
                    });
                }
            }
            PluginSpec::Transpile(options) => {
                if options.exclude.iter().any(|glob| glob.trim().is_empty()) {
                    return Err(ConfigError::SchemaValidation {
                        message: "transpile exclude patterns cannot be empty".to_string(),
                        hint: Some("remove empty globs from 'exclude'".to_string()),
                    });
                }
            }
            _ => {}
        }

        let Some(stage) = plugin.stage() else {
            continue;
        };

        if seen.iter().any(|(s, _)| *s == stage) {
            return Err(ConfigError::DuplicateStage(plugin.name().to_string()));
        }

        if let Some((max, max_name)) = seen.last() {
            if stage < *max {
                return Err(ConfigError::StageOrder {
                    earlier: plugin.name().to_string(),
                    later: (*max_name).to_string(),
                });
            }
        }

        seen.push((stage, plugin.name()));
    }

    Ok(())
}

/// Filesystem validator (for CLI use).
///
/// Runs schema validation first, then checks that the entry exists and
/// that the output location is writable in principle (its nearest
/// existing ancestor is a directory).
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        SchemaValidator.validate(config)?;

        let entry = self.root.join(&config.entry);
        if !entry.is_file() {
            return Err(ConfigError::EntryNotFound { path: entry });
        }

        let output = self.root.join(&config.output.file);
        if let Some(parent) = output.parent() {
            let nearest = parent.ancestors().find(|ancestor| ancestor.exists());
            match nearest {
                Some(ancestor) if ancestor.is_dir() => {}
                _ => {
                    return Err(ConfigError::OutputDirMissing {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// A non-fatal finding about a configuration that validates cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Advisory findings the runner would silently tolerate.
pub fn collect_warnings(config: &BundleOptions) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if !config.output.format.requires_name() && config.output.name.is_some() {
        warnings.push(Warning {
            message: format!(
                "output.name is ignored for {} output",
                config.output.format
            ),
        });
    }

    let browser_resolution = config.plugins.iter().any(|p| match p {
        PluginSpec::Resolve(options) => options.browser,
        _ => false,
    });
    let polyfills = config
        .plugins
        .iter()
        .any(|p| matches!(p, PluginSpec::NodePolyfills(_)));
    if polyfills && !browser_resolution {
        warnings.push(Warning {
            message: "node-polyfills is active but module resolution is not browser-targeted"
                .to_string(),
        });
    }

    let transpile_without_maps = config.plugins.iter().any(|p| match p {
        PluginSpec::Transpile(options) => !options.sourcemaps,
        _ => false,
    });
    if config.output.sourcemap.is_some()
        && config.output.sourcemap != Some(SourceMapMode::Hidden)
        && transpile_without_maps
    {
        warnings.push(Warning {
            message: "output requests source maps but the transpile stage does not emit them"
                .to_string(),
        });
    }

    warnings
}

/// Convenience function for schema-only validation.
pub fn validate_schema(config: &BundleOptions) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(config: &BundleOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
