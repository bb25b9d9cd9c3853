//! Structural equivalence across representations.

use latch_config::{BundleOptions, LatchConfig, equivalence};
use serde_json::json;

#[test]
fn toml_and_package_json_representations_are_equivalent() {
    let from_toml: LatchConfig = toml::from_str(
        r#"
[bundle]
entry = "src/index.js"

[bundle.output]
file = "dist/bundle.esm.js"
format = "esm"

[[bundle.plugins]]
name = "resolve"
browser = true

[[bundle.plugins]]
name = "json"
"#,
    )
    .unwrap();

    let from_json = LatchConfig::from_value(json!({
        "bundle": {
            "entry": "src/index.js",
            "output": { "file": "dist/bundle.esm.js", "format": "esm" },
            "plugins": [
                { "name": "resolve", "browser": true },
                { "name": "json" }
            ]
        }
    }))
    .unwrap();

    let report = equivalence::compare(&from_toml.bundle, &from_json.bundle);
    assert!(report.is_equivalent(), "differences: {:?}", report.differences);
}

#[test]
fn a_default_and_an_explicit_stock_config_are_equivalent() {
    let explicit = LatchConfig::from_value(json!({
        "bundle": {
            "entry": "src/index.js",
            "output": { "file": "dist/bundle.esm.js", "format": "esm" },
            "plugins": [
                { "name": "node-polyfills" },
                { "name": "resolve", "browser": true },
                { "name": "transpile", "helpers": "bundled" },
                { "name": "commonjs", "transform_mixed_es_modules": true },
                { "name": "json" }
            ]
        }
    }))
    .unwrap();

    let report = equivalence::compare(&BundleOptions::default(), &explicit.bundle);
    assert!(report.is_equivalent(), "differences: {:?}", report.differences);
}

#[test]
fn differences_render_with_field_paths() {
    let left = BundleOptions::default();
    let right = LatchConfig::from_value(json!({
        "bundle": {
            "entry": "src/index.js",
            "output": { "file": "dist/bundle.cjs", "format": "cjs" }
        }
    }))
    .unwrap()
    .bundle;

    let report = equivalence::compare(&left, &right);
    let paths: Vec<&str> = report
        .differences
        .iter()
        .map(|d| d.path.as_str())
        .collect();
    assert!(paths.contains(&"output.file"));
    assert!(paths.contains(&"output.format"));

    let rendered = report.differences[0].to_string();
    assert!(rendered.contains("!="));
}
