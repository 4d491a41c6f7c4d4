//! newcomp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the newcomp
//! component generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           newcomp-cli (CLI)             │
//! │     (prompts, output, configuration)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ComponentService: plan / apply)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Renderer, SourceEditor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    newcomp-adapters (Infrastructure)    │
//! │ (LocalFilesystem, CppRenderer, Marker…) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ComponentSpec, Wiring, RenderContext) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newcomp_core::{
//!     application::{ComponentService, ProjectLayout},
//!     domain::ComponentSpec,
//! };
//!
//! let spec = ComponentSpec::new("periodics", "speedsensor", false).unwrap();
//!
//! let service = ComponentService::new(renderer, editor, filesystem, ProjectLayout::new("."));
//! let plan = service.plan(&spec).unwrap();
//! service.apply(plan).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentService, MaterializePlan, MaterializeReport, ProjectLayout, StepOutcome,
        ports::{ComponentRenderer, Filesystem, SourceEditor},
    };
    pub use crate::domain::{
        Category, ComponentName, ComponentSpec, RenderContext, RenderedComponent, TextEdit,
        Wiring, WiringOptions,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
