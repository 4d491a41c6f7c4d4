//! `newcomp init`: write a default `.newcomp.toml` for the project.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create the project configuration file in the current directory.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = Path::new(LOCAL_CONFIG);

    if write_default(path, args.force)? {
        output.success(&format!("Configuration created at {}", path.display()))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
    }

    Ok(())
}

/// Write the default configuration. Returns `false` when an existing file
/// was left alone.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}
