//! Plan shape and ordering guarantees.

use std::path::{Path, PathBuf};

use latch_config::{BundleOptions, CustomPlugin, LatchConfig, PluginSpec};
use latch_pipeline::{BundlePlan, normalize};
use serde_json::json;

#[test]
fn the_stock_config_plans_the_original_pipeline() {
    let plan = normalize(&BundleOptions::default(), Path::new("/work/project")).unwrap();

    assert_eq!(plan.entry, PathBuf::from("/work/project/src/index.js"));
    assert_eq!(
        plan.output.file,
        PathBuf::from("/work/project/dist/bundle.esm.js")
    );
    assert_eq!(
        plan.plugin_names(),
        ["node-polyfills", "resolve", "transpile", "commonjs", "json"]
    );
}

#[test]
fn plugin_order_is_carried_through_untouched() {
    let config = LatchConfig::from_value(json!({
        "bundle": {
            "entry": "src/index.js",
            "plugins": [
                { "name": "first-banner" },
                { "name": "resolve" },
                { "name": "transpile" },
                { "name": "final-banner" }
            ]
        }
    }))
    .unwrap();

    let plan = normalize(&config.bundle, Path::new("/work")).unwrap();
    assert_eq!(
        plan.plugin_names(),
        ["first-banner", "resolve", "transpile", "final-banner"]
    );
}

#[test]
fn option_bags_are_made_explicit() {
    let plan = normalize(&BundleOptions::default(), Path::new("/work")).unwrap();

    let resolve = plan
        .plugins
        .iter()
        .find(|p| p.name == "resolve")
        .expect("resolve planned");
    assert_eq!(resolve.options["browser"], json!(true));
    assert_eq!(resolve.options["prefer_builtins"], json!(true));

    let transpile = plan
        .plugins
        .iter()
        .find(|p| p.name == "transpile")
        .expect("transpile planned");
    assert_eq!(transpile.options["helpers"], json!("bundled"));
    assert_eq!(transpile.options["exclude"], json!(["node_modules/**"]));
}

#[test]
fn bare_custom_plugins_plan_with_an_empty_bag() {
    let mut options = BundleOptions::default();
    options.plugins.push(PluginSpec::Custom(CustomPlugin {
        name: "terser".to_string(),
        options: serde_json::Value::Null,
    }));

    let plan = normalize(&options, Path::new("/work")).unwrap();
    let terser = plan.plugins.iter().find(|p| p.name == "terser").unwrap();
    assert!(terser.options.is_empty());
}

#[test]
fn plan_json_round_trips() {
    let plan = normalize(&BundleOptions::default(), Path::new("/work")).unwrap();
    let rendered = plan.to_json().unwrap();
    let parsed: BundlePlan = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, plan);
}
