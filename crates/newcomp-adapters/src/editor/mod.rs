//! Source editors for hand-maintained collaborator files.

mod lines;
mod marker;

pub use lines::LineBuffer;
pub use marker::{MarkerEditor, MarkerSet};
