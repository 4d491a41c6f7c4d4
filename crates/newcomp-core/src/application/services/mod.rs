//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the one use case of this tool: add a component to a project.

pub mod component_service;
pub mod plan;

pub use component_service::ComponentService;
pub use plan::{
    CategoryRegistration, FileAction, MaterializePlan, MaterializeReport, PendingAppend,
    PendingEdit, StepOutcome,
};
