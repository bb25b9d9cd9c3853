//! Init command implementation.
//!
//! Writes a starter latch.toml reproducing the stock pipeline.

use std::fs;

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

const STARTER: &str = r#"# latch configuration
# The plugin list order is the pipeline order the runner executes.

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
"#;

/// Execute the init command.
pub fn execute(args: InitArgs) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            dir
        }
        None => utils::get_cwd()?,
    };

    let path = dir.join("latch.toml");
    if path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write(&path, STARTER)?;
    ui::success(&format!("wrote {}", path.display()));
    ui::info("next: latch check, then latch plan");

    Ok(())
}
