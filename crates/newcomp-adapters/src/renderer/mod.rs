//! Component renderers.

mod cpp;
pub mod templates;

pub use cpp::{Banner, CppRenderer};
