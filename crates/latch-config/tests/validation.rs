//! Validation of configurations loaded from files.

use latch_config::{ConfigError, LatchConfig, collect_warnings, validate_fs, validate_schema};
use std::fs;
use tempfile::TempDir;

#[test]
fn a_loaded_stock_config_validates() {
    let config: LatchConfig = toml::from_str(
        r#"
[bundle]
entry = "src/index.js"

[bundle.output]
file = "dist/bundle.esm.js"
format = "esm"

[[bundle.plugins]]
name = "node-polyfills"

[[bundle.plugins]]
name = "resolve"
browser = true

[[bundle.plugins]]
name = "transpile"
helpers = "bundled"
exclude = ["node_modules/**"]

[[bundle.plugins]]
name = "commonjs"
transform_mixed_es_modules = true

[[bundle.plugins]]
name = "json"
"#,
    )
    .unwrap();

    validate_schema(&config.bundle).unwrap();
    assert!(collect_warnings(&config.bundle).is_empty());
}

#[test]
fn interop_before_resolution_is_rejected() {
    let config: LatchConfig = toml::from_str(
        r#"
[bundle]
entry = "src/index.js"

[[bundle.plugins]]
name = "commonjs"

[[bundle.plugins]]
name = "resolve"
"#,
    )
    .unwrap();

    let err = validate_schema(&config.bundle).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::StageOrder { earlier, later }
            if earlier == "resolve" && later == "commonjs"
    ));
}

#[test]
fn a_second_transpile_stage_is_rejected() {
    let config: LatchConfig = toml::from_str(
        r#"
[bundle]
entry = "src/index.js"

[[bundle.plugins]]
name = "transpile"

[[bundle.plugins]]
name = "transpile"
helpers = "runtime"
"#,
    )
    .unwrap();

    assert!(matches!(
        validate_schema(&config.bundle).unwrap_err(),
        ConfigError::DuplicateStage(name) if name == "transpile"
    ));
}

#[test]
fn custom_plugins_may_appear_anywhere() {
    let config: LatchConfig = toml::from_str(
        r#"
[bundle]
entry = "src/index.js"

[[bundle.plugins]]
name = "license-banner"

[bundle.plugins.options]
file = "LICENSE"

[[bundle.plugins]]
name = "resolve"

[[bundle.plugins]]
name = "terser"
"#,
    )
    .unwrap();

    validate_schema(&config.bundle).unwrap();
    let names: Vec<&str> = config.bundle.plugins.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["license-banner", "resolve", "terser"]);
}

#[test]
fn fs_validation_checks_entry_and_output_location() {
    let dir = TempDir::new().unwrap();
    let config = LatchConfig::default();

    // no entry on disk yet
    assert!(matches!(
        validate_fs(&config.bundle, dir.path()).unwrap_err(),
        ConfigError::EntryNotFound { .. }
    ));

    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.js"), "export default 1;\n").unwrap();

    // dist/ does not exist, but its parent (the root) does
    validate_fs(&config.bundle, dir.path()).unwrap();
}
