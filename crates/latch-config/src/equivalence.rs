//! Structural equivalence of build configurations.
//!
//! Two configurations are equivalent when a runner given either would be
//! parameterized identically: same entry, same output descriptor, same
//! plugin activation sequence in the same relative order, and the same
//! option bag per activation. Everything is compared through canonical
//! JSON, so typed and custom plugins are handled uniformly.

use serde_json::Value;

use crate::bundle::BundleOptions;

/// One field where two configurations disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Dotted path of the diverging field, e.g. `output.format`
    pub path: String,
    pub left: String,
    pub right: String,
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} != {}", self.path, self.left, self.right)
    }
}

/// Outcome of a structural comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceReport {
    pub differences: Vec<Difference>,
}

impl EquivalenceReport {
    pub fn is_equivalent(&self) -> bool {
        self.differences.is_empty()
    }

    fn push(&mut self, path: impl Into<String>, left: impl ToString, right: impl ToString) {
        self.differences.push(Difference {
            path: path.into(),
            left: left.to_string(),
            right: right.to_string(),
        });
    }
}

/// Compare two build configurations structurally.
pub fn compare(left: &BundleOptions, right: &BundleOptions) -> EquivalenceReport {
    let mut report = EquivalenceReport::default();

    if left.entry != right.entry {
        report.push(
            "entry",
            left.entry.display(),
            right.entry.display(),
        );
    }

    if left.output.file != right.output.file {
        report.push(
            "output.file",
            left.output.file.display(),
            right.output.file.display(),
        );
    }

    if left.output.format != right.output.format {
        report.push("output.format", left.output.format, right.output.format);
    }

    if left.output.name != right.output.name {
        report.push(
            "output.name",
            render_option(&left.output.name),
            render_option(&right.output.name),
        );
    }

    if left.output.sourcemap != right.output.sourcemap {
        report.push(
            "output.sourcemap",
            render_value(&serde_json::to_value(left.output.sourcemap).unwrap_or(Value::Null)),
            render_value(&serde_json::to_value(right.output.sourcemap).unwrap_or(Value::Null)),
        );
    }

    if left.external != right.external {
        report.push(
            "external",
            left.external.join(", "),
            right.external.join(", "),
        );
    }

    compare_plugins(left, right, &mut report);

    report
}

fn compare_plugins(left: &BundleOptions, right: &BundleOptions, report: &mut EquivalenceReport) {
    let left_names: Vec<&str> = left.plugins.iter().map(|p| p.name()).collect();
    let right_names: Vec<&str> = right.plugins.iter().map(|p| p.name()).collect();

    // Names and relative order first; option bags are only comparable
    // once the activation sequences line up.
    if left_names != right_names {
        report.push("plugins", left_names.join(" > "), right_names.join(" > "));
        return;
    }

    for (index, (a, b)) in left.plugins.iter().zip(&right.plugins).enumerate() {
        let left_bag = a.option_bag();
        let right_bag = b.option_bag();
        if left_bag != right_bag {
            report.push(
                format!("plugins[{index}] ({})", a.name()),
                render_value(&left_bag),
                render_value(&right_bag),
            );
        }
    }
}

fn render_option(value: &Option<String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => "<unset>".to_string(),
    }
}

fn render_value(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unrenderable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{JsonOptions, OutputFormat, PluginSpec};

    #[test]
    fn identical_configs_are_equivalent() {
        let a = BundleOptions::default();
        let b = BundleOptions::default();
        assert!(compare(&a, &b).is_equivalent());
    }

    #[test]
    fn format_difference_is_reported_by_path() {
        let a = BundleOptions::default();
        let mut b = BundleOptions::default();
        b.output.format = OutputFormat::Cjs;

        let report = compare(&a, &b);
        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].path, "output.format");
        assert_eq!(report.differences[0].left, "esm");
        assert_eq!(report.differences[0].right, "cjs");
    }

    #[test]
    fn reordered_plugins_are_not_equivalent() {
        let a = BundleOptions::default();
        let mut b = BundleOptions::default();
        b.plugins.swap(0, 1);

        let report = compare(&a, &b);
        assert!(!report.is_equivalent());
        assert_eq!(report.differences[0].path, "plugins");
    }

    #[test]
    fn option_bag_difference_names_the_plugin() {
        let a = BundleOptions::default();
        let mut b = BundleOptions::default();
        for plugin in &mut b.plugins {
            if let PluginSpec::Json(options) = plugin {
                *options = JsonOptions {
                    compact: true,
                    ..JsonOptions::default()
                };
            }
        }

        let report = compare(&a, &b);
        assert_eq!(report.differences.len(), 1);
        assert!(report.differences[0].path.contains("json"));
    }
}
