//! Top-level configuration structure and profile merging.
//!
//! For file discovery and layered loading, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::BundleOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

/// Shape of a latch configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatchConfig {
    #[serde(default)]
    pub bundle: BundleOptions,

    /// Named overlays applied on top of the base configuration
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Raw overlay values for one profile.
///
/// Kept as untyped JSON so a profile can override any subset of fields;
/// the merged result is re-deserialized into the typed model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub bundle: Value,

    #[serde(default)]
    pub settings: Value,
}

impl LatchConfig {
    /// Create from serde_json::Value (for programmatic config)
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Apply a named profile overlay onto the base configuration.
    ///
    /// Objects merge recursively; arrays and scalars replace. A plugin
    /// list in a profile therefore replaces the base pipeline wholesale,
    /// keeping the overlay's order intact.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let profile_cfg = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if !profile_cfg.bundle.is_null() {
            let mut base = serde_json::to_value(&self.bundle)
                .map_err(|err| ConfigError::InvalidProfileOverride(err.to_string()))?;
            merge_values(&mut base, &profile_cfg.bundle);
            self.bundle = serde_json::from_value(base)
                .map_err(|err| ConfigError::InvalidProfileOverride(err.to_string()))?;
        }

        if !profile_cfg.settings.is_null() {
            let mut base = serde_json::to_value(&self.settings)
                .map_err(|err| ConfigError::InvalidProfileOverride(err.to_string()))?;
            merge_values(&mut base, &profile_cfg.settings);
            self.settings = serde_json::from_value(base)
                .map_err(|err| ConfigError::InvalidProfileOverride(err.to_string()))?;
        }

        Ok(self)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
