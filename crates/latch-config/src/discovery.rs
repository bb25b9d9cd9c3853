//! File-based config discovery and layered loading.
//!
//! Handles finding latch configuration files on disk and assembling the
//! effective configuration from defaults, the discovered file and
//! `LATCH_*` environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde_json::Value;
use tracing::debug;

use crate::config::LatchConfig;
use crate::error::{ConfigError, Result};

/// File-based configuration discovery.
///
/// Searches for latch configuration files in conventional locations and
/// loads them. This is primarily for CLI use; library users can build a
/// [`LatchConfig`] from a value directly.
///
/// # Example
///
/// ```no_run
/// use latch_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory.
    ///
    /// Searches in this order:
    /// 1. latch.toml
    /// 2. package.json with a non-null "latch" field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("latch.toml");
        if toml_path.exists() {
            debug!(path = %toml_path.display(), "discovered config");
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("latch").is_some_and(|v| !v.is_null()) {
                        debug!(path = %pkg_path.display(), "discovered config in package.json");
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no config file is found.
    pub fn load(&self) -> Result<LatchConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config and apply a profile overlay.
    pub fn load_with_profile(&self, profile: &str) -> Result<LatchConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path.
    pub fn load_from(&self, path: &Path) -> Result<LatchConfig> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {}
            Some(other) => return Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => return Err(ConfigError::UnsupportedFormat("<none>".to_string())),
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: format!("invalid TOML syntax: {e}"),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: e.to_string(),
        })?;

        LatchConfig::from_value(value)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<LatchConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: format!("invalid JSON: {e}"),
            })?;

        let latch_value = parsed.get("latch").ok_or_else(|| ConfigError::InvalidValue {
            field: "latch".to_string(),
            hint: "add a 'latch' field to package.json".to_string(),
        })?;

        if latch_value.is_null() {
            return Err(ConfigError::InvalidValue {
                field: "latch".to_string(),
                hint: "the 'latch' field cannot be null".to_string(),
            });
        }

        LatchConfig::from_value(latch_value.clone())
    }
}

/// Assemble the effective configuration from layered sources.
///
/// Priority, lowest to highest: built-in defaults, the discovered (or
/// explicitly given) config file, `LATCH_*` environment variables. The
/// profile overlay is applied on the merged result.
///
/// With no config file present this succeeds and yields the defaults,
/// which reproduce the stock pipeline.
pub fn load_layered(
    root: impl AsRef<Path>,
    explicit: Option<&Path>,
    profile: Option<&str>,
) -> Result<LatchConfig> {
    let root = root.as_ref();
    let mut figment = Figment::new().merge(Serialized::defaults(LatchConfig::default()));

    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => ConfigDiscovery::new(root).find(),
    };

    if let Some(path) = file {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            // package.json carries the config under its "latch" field, which
            // figment's Json provider cannot scope to; go through discovery.
            let config = ConfigDiscovery::new(root).load_from(&path)?;
            figment = figment.merge(Serialized::defaults(config));
        } else {
            figment = figment.merge(Toml::file(path));
        }
    }

    figment = figment.merge(Env::prefixed("LATCH_").split("_"));

    let config: LatchConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: e.to_string(),
    })?;

    config.materialize_profile(profile)
}

/// Discover and load config from the current directory.
pub fn discover() -> Result<LatchConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with a profile overlay.
pub fn discover_with_profile(profile: &str) -> Result<LatchConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("latch.toml");
        fs::write(
            &config_path,
            r#"
[bundle]
entry = "src/index.js"
"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latch.yaml");
        fs::write(&path, "bundle: {}").unwrap();

        let result = ConfigDiscovery::new(dir.path()).load_from(&path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedFormat(ext) if ext == "yaml"
        ));
    }
}
