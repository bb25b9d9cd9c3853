//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub log_format: Option<String>,

    /// Environment variables exported to the runner process
    #[serde(default)]
    pub environment: HashMap<String, String>,
}
