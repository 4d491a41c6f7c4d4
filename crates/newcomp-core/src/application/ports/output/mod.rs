//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `newcomp-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Category, ComponentSpec, RenderedComponent, TextEdit, Wiring};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `newcomp_adapters::filesystem::LocalFilesystem` (production)
/// - `newcomp_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it whole.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Write content to a file that must not exist yet.
    ///
    /// Returns `false`, leaving the file untouched, when something already
    /// occupies the path.
    fn create_file(&self, path: &Path, content: &str) -> ScaffoldResult<bool>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> ScaffoldResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for turning a component spec into header and source bodies.
///
/// Implemented by:
/// - `newcomp_adapters::renderer::CppRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait ComponentRenderer: Send + Sync {
    fn render(&self, spec: &ComponentSpec) -> ScaffoldResult<RenderedComponent>;
}

/// Port for the insertions made into hand-maintained collaborator files.
///
/// Editors work on text only; reading and writing stay with the caller, so
/// a syntax-aware editor can replace the marker-based one without touching
/// rendering or I/O.
///
/// Implemented by:
/// - `newcomp_adapters::editor::MarkerEditor` (line scan + insert)
#[cfg_attr(test, mockall::automock)]
pub trait SourceEditor: Send + Sync {
    /// Register a category's source glob and include directory in the build
    /// file. Returns `None` when the category is already registered.
    fn register_category(
        &self,
        build_file: &Path,
        content: &str,
        category: &Category,
    ) -> ScaffoldResult<Option<TextEdit>>;

    /// Insert the component's instance, dispatch entry and task entry into
    /// the composition file.
    fn wire_component(
        &self,
        composition_file: &Path,
        content: &str,
        wiring: &Wiring,
    ) -> ScaffoldResult<TextEdit>;
}
