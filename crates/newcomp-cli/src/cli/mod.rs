//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "newcomp",
    bin_name = "newcomp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Add C++ components to an embedded project",
    long_about = "newcomp creates the header/source pair of a new component, \
                  registers new categories in CMakeLists.txt and wires the \
                  component into source/main.cpp.",
    after_help = "EXAMPLES:\n\
        \x20 newcomp new --category periodics --name speedsensor\n\
        \x20 newcomp new --category drivers --name motor --callback --yes\n\
        \x20 newcomp list\n\
        \x20 newcomp completions bash > /usr/share/bash-completion/completions/newcomp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new component.
    #[command(
        visible_alias = "n",
        about = "Create a new component",
        after_help = "EXAMPLES:\n\
            \x20 newcomp new                                       # prompts for everything\n\
            \x20 newcomp new --category periodics --name imu -y\n\
            \x20 newcomp new --category sensors --name lidar --callback=false --dry-run"
    )]
    New(NewArgs),

    /// List categories and components of the project.
    #[command(
        visible_alias = "ls",
        about = "List categories and components",
        after_help = "EXAMPLES:\n\
            \x20 newcomp list\n\
            \x20 newcomp list --format json"
    )]
    List(ListArgs),

    /// Write a default `.newcomp.toml` into the current directory.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 newcomp init\n\
            \x20 newcomp init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 newcomp completions bash > ~/.local/share/bash-completion/completions/newcomp\n\
            \x20 newcomp completions zsh  > ~/.zfunc/_newcomp\n\
            \x20 newcomp completions fish > ~/.config/fish/completions/newcomp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 newcomp config get markers.component\n\
            \x20 newcomp config list\n\
            \x20 newcomp config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `newcomp new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Component category (namespace and sub-directory).
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Category, e.g. brain, drivers, periodics, utils or a new one"
    )]
    pub category: Option<String>,

    /// Component name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Component name (lower-case, starts with a letter)"
    )]
    pub name: Option<String>,

    /// Add a serial command callback.
    ///
    /// `--callback` alone means yes; `--callback=false` answers the prompt
    /// with no.
    #[arg(
        long = "callback",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Add a serial callback hook"
    )]
    pub callback: Option<bool>,

    /// Project root (skips discovery).
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: search upwards from the current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation; a missing --callback means no"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show the plan without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `newcomp list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project root (skips discovery).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Project root")]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `category/component` per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `newcomp init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `newcomp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `newcomp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `markers.component`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
