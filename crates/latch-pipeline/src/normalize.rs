//! Normalization of a build configuration into a [`BundlePlan`].
//!
//! This is the lifecycle step between "configuration literal" and
//! "runner input": the configuration is validated, paths are resolved
//! against the working directory, defaults are made explicit and the
//! plugin order is carried through untouched.

use indexmap::IndexMap;
use path_clean::PathClean;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use latch_config::{BundleOptions, PluginSpec, validate_schema};

use crate::error::{PipelineError, Result};
use crate::plan::{BundlePlan, PlannedOutput, PlannedPlugin};

/// Resolve `options` into a runner-ready plan, with paths anchored at `cwd`.
pub fn normalize(options: &BundleOptions, cwd: &Path) -> Result<BundlePlan> {
    validate_schema(options)?;

    let entry = resolve_path(&options.entry, cwd);
    let file = resolve_path(&options.output.file, cwd);

    let plugins = options
        .plugins
        .iter()
        .map(plan_plugin)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        entry = %entry.display(),
        plugins = plugins.len(),
        "normalized bundle plan"
    );

    Ok(BundlePlan {
        entry,
        output: PlannedOutput {
            file,
            format: options.output.format,
            name: options.output.name.clone(),
            sourcemap: options.output.sourcemap,
        },
        external: options.external.clone(),
        plugins,
    })
}

fn plan_plugin(spec: &PluginSpec) -> Result<PlannedPlugin> {
    let options = match spec.option_bag() {
        Value::Object(map) => map.into_iter().collect::<IndexMap<String, Value>>(),
        Value::Null => IndexMap::new(),
        _ => {
            return Err(PipelineError::InvalidPluginOptions {
                name: spec.name().to_string(),
            });
        }
    };

    Ok(PlannedPlugin {
        name: spec.name().to_string(),
        options,
    })
}

/// Anchor a path at `cwd` and clean out `.` and `..` components.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}
