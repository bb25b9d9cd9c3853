//! Tests for profile overlay semantics.

use latch_config::{ConfigError, LatchConfig, OutputFormat};
use serde_json::json;

fn base_config() -> LatchConfig {
    LatchConfig::from_value(json!({
        "bundle": {
            "entry": "src/index.js",
            "output": { "file": "dist/bundle.esm.js", "format": "esm" },
            "external": ["react"]
        },
        "settings": {
            "log_level": "info",
            "environment": { "NODE_ENV": "development" }
        },
        "profiles": {
            "production": {
                "bundle": { "output": { "format": "cjs", "file": "dist/bundle.cjs" } },
                "settings": { "environment": { "NODE_ENV": "production" } }
            },
            "minimal": {
                "bundle": { "plugins": [ { "name": "resolve" }, { "name": "json" } ] }
            }
        }
    }))
    .unwrap()
}

#[test]
fn bundle_and_settings_merge_independently() {
    let config = base_config()
        .materialize_profile(Some("production"))
        .unwrap();

    assert_eq!(config.bundle.output.format, OutputFormat::Cjs);
    assert_eq!(
        config.settings.environment.get("NODE_ENV").map(String::as_str),
        Some("production")
    );
    // untouched by the overlay
    assert_eq!(config.settings.log_level.as_deref(), Some("info"));
    assert_eq!(config.bundle.external, vec!["react".to_string()]);
}

#[test]
fn plugin_overlay_keeps_its_own_order() {
    let config = base_config().materialize_profile(Some("minimal")).unwrap();
    let names: Vec<&str> = config.bundle.plugins.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["resolve", "json"]);
}

#[test]
fn profiles_survive_materialization_of_another_profile() {
    let config = base_config()
        .materialize_profile(Some("production"))
        .unwrap();
    assert!(config.profiles.contains_key("minimal"));
}

#[test]
fn bad_overlay_value_is_a_profile_error() {
    let config = LatchConfig::from_value(json!({
        "bundle": { "entry": "src/index.js" },
        "profiles": {
            "broken": { "bundle": { "output": { "format": "umd" } } }
        }
    }))
    .unwrap();

    let result = config.materialize_profile(Some("broken"));
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::InvalidProfileOverride(_)
    ));
}
