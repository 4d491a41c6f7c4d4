//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `newcomp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ComponentRenderer`: Header/source generation
//!   - `SourceEditor`: Marker-based insertion into collaborator files
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ComponentRenderer, Filesystem, SourceEditor};

#[cfg(test)]
pub use output::{MockComponentRenderer, MockFilesystem, MockSourceEditor};
