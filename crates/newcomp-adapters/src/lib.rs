//! Infrastructure adapters for newcomp.
//!
//! This crate implements the ports defined in `newcomp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod editor;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use editor::{MarkerEditor, MarkerSet};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{Banner, CppRenderer};
