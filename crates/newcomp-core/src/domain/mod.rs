// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for newcomp.
//!
//! This module contains pure logic with no I/O. Rendering engines, text
//! editors and the filesystem are reached through ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or process calls
//! - **Validated values**: `Category` and `ComponentName` cannot hold bad input
//! - **Immutable entities**: `ComponentSpec` is never mutated after construction
//!
// Public API - what the world sees
pub mod component;
pub mod edit;
pub mod error;
pub mod render_context;
pub mod value_objects;
pub mod wiring;

// Re-exports for convenience
pub use component::{ComponentSpec, GeneratedFile, RenderedComponent};
pub use edit::{Insertion, InsertionKind, TextEdit};
pub use error::{DomainError, ErrorCategory};
pub use render_context::RenderContext;
pub use value_objects::{Category, ComponentName};
pub use wiring::{Wiring, WiringOptions};
