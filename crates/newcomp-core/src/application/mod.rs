//! Application layer for newcomp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComponentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Layout**: Where the project keeps its files
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or text rules itself. Those live in `crate::domain`.

pub mod error;
pub mod layout;
pub mod ports;
pub mod services;

pub use services::{
    CategoryRegistration, ComponentService, FileAction, MaterializePlan, MaterializeReport,
    StepOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ComponentRenderer, Filesystem, SourceEditor};

pub use error::ApplicationError;
pub use layout::ProjectLayout;
