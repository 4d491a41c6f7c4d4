//! Where things live inside an embedded project.
//!
//! [`ProjectLayout`] is built once at startup (from configuration) and passed
//! into [`crate::application::ComponentService`]. Nothing in the core reads the
//! process working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Category, ComponentSpec},
    error::ScaffoldResult,
};

/// Project-relative locations of everything the mutator reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    include_dir: PathBuf,
    source_dir: PathBuf,
    aggregate_header: PathBuf,
    composition_file: PathBuf,
    build_file: PathBuf,
    known_categories: Vec<Category>,
}

impl ProjectLayout {
    /// Layout of the embedded platform with its built-in categories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_dir: PathBuf::from("include"),
            source_dir: PathBuf::from("source"),
            aggregate_header: PathBuf::from("include").join("main.hpp"),
            composition_file: PathBuf::from("source").join("main.cpp"),
            build_file: PathBuf::from("CMakeLists.txt"),
            known_categories: Category::builtin(),
        }
    }

    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dir = dir.into();
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_aggregate_header(mut self, path: impl Into<PathBuf>) -> Self {
        self.aggregate_header = path.into();
        self
    }

    pub fn with_composition_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.composition_file = path.into();
        self
    }

    pub fn with_build_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_file = path.into();
        self
    }

    pub fn with_known_categories(mut self, categories: Vec<Category>) -> Self {
        self.known_categories = categories;
        self
    }

    /// Locate the project root by walking up from `start`.
    ///
    /// The first ancestor (including `start`) holding the build file and both
    /// the include and source directories wins.
    pub fn discover(self, start: &Path, fs: &dyn Filesystem) -> ScaffoldResult<Self> {
        for candidate in start.ancestors() {
            debug!(path = %candidate.display(), "checking candidate project root");
            if fs.exists(&candidate.join(&self.build_file))
                && fs.is_dir(&candidate.join(&self.include_dir))
                && fs.is_dir(&candidate.join(&self.source_dir))
            {
                return Ok(Self {
                    root: candidate.to_path_buf(),
                    ..self
                });
            }
        }

        Err(ApplicationError::ProjectRootNotFound {
            start: start.to_path_buf(),
        }
        .into())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn known_categories(&self) -> &[Category] {
        &self.known_categories
    }

    pub fn is_known(&self, category: &Category) -> bool {
        self.known_categories.contains(category)
    }

    pub fn include_root(&self) -> PathBuf {
        self.root.join(&self.include_dir)
    }

    pub fn include_dir(&self, category: &Category) -> PathBuf {
        self.include_root().join(category.as_str())
    }

    pub fn source_dir(&self, category: &Category) -> PathBuf {
        self.root.join(&self.source_dir).join(category.as_str())
    }

    pub fn header_path(&self, spec: &ComponentSpec) -> PathBuf {
        self.include_dir(spec.category())
            .join(format!("{}.hpp", spec.name()))
    }

    pub fn source_path(&self, spec: &ComponentSpec) -> PathBuf {
        self.source_dir(spec.category())
            .join(format!("{}.cpp", spec.name()))
    }

    pub fn aggregate_header(&self) -> PathBuf {
        self.root.join(&self.aggregate_header)
    }

    pub fn composition_file(&self) -> PathBuf {
        self.root.join(&self.composition_file)
    }

    pub fn build_file(&self) -> PathBuf {
        self.root.join(&self.build_file)
    }
}
