use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Category, ComponentName},
};

/// Everything needed to generate one component.
///
/// Built once per run from user input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    category: Category,
    name: ComponentName,
    wants_callback: bool,
}

impl ComponentSpec {
    pub fn new(
        category: impl AsRef<str>,
        name: impl AsRef<str>,
        wants_callback: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            category: Category::new(category)?,
            name: ComponentName::new(name)?,
            wants_callback,
        })
    }

    pub fn from_parts(category: Category, name: ComponentName, wants_callback: bool) -> Self {
        Self {
            category,
            name,
            wants_callback,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    pub fn wants_callback(&self) -> bool {
        self.wants_callback
    }

    pub fn is_periodic(&self) -> bool {
        self.category.is_periodic()
    }

    /// `drivers/motor.hpp`, as written in `#include` directives.
    pub fn header_include(&self) -> String {
        format!("{}/{}.hpp", self.category, self.name)
    }
}

/// Header and implementation bodies produced by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    pub header: String,
    pub source: String,
}

/// A file body bound to its destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    #[serde(skip)]
    pub body: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}
