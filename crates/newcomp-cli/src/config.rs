//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`],
//! [`MarkerSet`] and [`WiringOptions`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`NEWCOMP__SECTION__KEY`)
//! 3. `--config FILE`
//! 4. `.newcomp.toml` in the current directory
//! 5. Global file (`config.toml` in the platform config directory)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use newcomp_adapters::{Banner, MarkerSet};
use newcomp_core::{
    application::ProjectLayout,
    domain::{Category, DomainError, WiringOptions},
};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG: &str = ".newcomp.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the project keeps its files.
    pub project: ProjectConfig,
    /// Literal markers searched for in collaborator files.
    pub markers: MarkerSet,
    /// Constructor arguments of generated global instances.
    pub wiring: WiringOptions,
    /// Optional doxygen banner on generated files.
    pub banner: BannerConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Fixed project root; discovered from the working directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub include_dir: PathBuf,
    pub source_dir: PathBuf,
    pub aggregate_header: PathBuf,
    pub composition_file: PathBuf,
    pub build_file: PathBuf,
    /// Categories the build file already covers.
    pub categories: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            include_dir: "include".into(),
            source_dir: "source".into(),
            aggregate_header: "include/main.hpp".into(),
            composition_file: "source/main.cpp".into(),
            build_file: "CMakeLists.txt".into(),
            categories: Category::BUILTIN.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub enabled: bool,
    pub author: String,
    pub version: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            author: String::new(),
            version: "V1.0.0".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from every source, lowest priority first.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(global) = Self::config_path() {
            builder = builder.add_source(
                config::File::from(global.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }
        builder = builder.add_source(
            config::File::from(Path::new(LOCAL_CONFIG))
                .format(config::FileFormat::Toml)
                .required(false),
        );
        if let Some(path) = config_file {
            builder = builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix("NEWCOMP")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("project.categories")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// `None` when the platform has no home directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "newcomp")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Layout rooted at `root`, with the configured names and categories.
    pub fn layout(&self, root: impl Into<PathBuf>) -> Result<ProjectLayout, DomainError> {
        let categories = self
            .project
            .categories
            .iter()
            .map(Category::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProjectLayout::new(root)
            .with_include_dir(&self.project.include_dir)
            .with_source_dir(&self.project.source_dir)
            .with_aggregate_header(&self.project.aggregate_header)
            .with_composition_file(&self.project.composition_file)
            .with_build_file(&self.project.build_file)
            .with_known_categories(categories))
    }

    /// Banner stamped with today's date, when enabled.
    pub fn banner(&self) -> Option<Banner> {
        self.banner
            .enabled
            .then(|| Banner::dated_today(&self.banner.author, &self.banner.version))
    }
}
