//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print results. No
//! naming or editing rules live here.

use std::path::Path;

use tracing::debug;

use newcomp_adapters::LocalFilesystem;
use newcomp_core::application::ProjectLayout;

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;

/// Project layout for a command.
///
/// `--root` wins, then `project.root` from the configuration. Otherwise the
/// working directory and its ancestors are searched for a project root.
pub(crate) fn resolve_layout(root: Option<&Path>, config: &AppConfig) -> CliResult<ProjectLayout> {
    if let Some(root) = root.or(config.project.root.as_deref()) {
        debug!(root = %root.display(), "using explicit project root");
        return Ok(config.layout(root)?);
    }

    let cwd = std::env::current_dir()?;
    let layout = config
        .layout(&cwd)?
        .discover(&cwd, &LocalFilesystem::new())?;
    debug!(root = %layout.root().display(), "discovered project root");
    Ok(layout)
}
