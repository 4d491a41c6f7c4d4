//! Implementation of the `newcomp list` command.

use newcomp_adapters::catalog;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::resolve_layout,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = resolve_layout(args.root.as_deref(), &config)?;
    let entries = catalog::scan(&layout)?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Categories in {}:", layout.root().display()))?;
            for entry in &entries {
                let note = if entry.known { "" } else { " (project)" };
                output.print(&format!(
                    "  {}{note}: {} component(s)",
                    entry.name,
                    entry.components.len()
                ))?;
                for component in &entry.components {
                    output.print(&format!("    - {component}"))?;
                }
            }
        }

        // Machine-readable formats bypass quiet mode.
        ListFormat::List => {
            for entry in &entries {
                for component in &entry.components {
                    println!("{}/{component}", entry.name);
                }
            }
        }

        ListFormat::Json => output.json(&entries)?,
    }

    Ok(())
}
