//! Domain value objects: Category and ComponentName.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, validated at
//! construction. Everything the templates need to derive from a name (class
//! name, include guard, global object name) is computed here so the renderer
//! and the wiring snippets agree on it.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ──────────────────────────────────────────────────────────────────

/// A named grouping of components, mapped to `include/<category>` and
/// `source/<category>`.
///
/// Always lower-case. Also used verbatim as the C++ namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// The reserved category whose components are periodic tasks.
    pub const PERIODICS: &'static str = "periodics";

    /// Categories shipped with the embedded platform.
    pub const BUILTIN: [&'static str; 4] = ["brain", "drivers", "periodics", "utils"];

    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let category = raw.as_ref().trim().to_ascii_lowercase();

        if category.is_empty() {
            return Err(DomainError::InvalidCategory {
                category,
                reason: "category cannot be empty".into(),
            });
        }
        if category.starts_with('.') {
            return Err(DomainError::InvalidCategory {
                category,
                reason: "category cannot start with '.'".into(),
            });
        }
        if let Some(c) = category
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(DomainError::InvalidCategory {
                reason: format!("'{c}' is not allowed in a namespace name"),
                category,
            });
        }
        if category.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DomainError::InvalidCategory {
                category,
                reason: "category cannot start with a digit".into(),
            });
        }

        Ok(Self(category))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether components in this category are periodic tasks.
    pub fn is_periodic(&self) -> bool {
        self.0 == Self::PERIODICS
    }

    pub fn builtin() -> Vec<Self> {
        Self::BUILTIN.iter().map(|c| Self(c.to_string())).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

// ── ComponentName ─────────────────────────────────────────────────────────────

/// The name of a single generated component.
///
/// Invariant: lower-case, non-empty, first character ASCII alphabetic, the
/// rest ASCII alphanumeric or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = raw.as_ref().trim().to_ascii_lowercase();

        let Some(first) = name.chars().next() else {
            return Err(DomainError::InvalidComponentName {
                name,
                reason: "name cannot be empty".into(),
            });
        };
        if !first.is_ascii_alphabetic() {
            return Err(DomainError::InvalidComponentName {
                reason: format!("name must start with a letter, found '{first}'"),
                name,
            });
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(DomainError::InvalidComponentName {
                reason: format!("'{c}' is not allowed in a class name"),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First letter upper-cased: `speedsensor` → `Speedsensor`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// C++ class name: `C` + capitalized name.
    pub fn class_name(&self) -> String {
        format!("C{}", self.capitalized())
    }

    /// Include guard macro: `MOTOR_HPP`.
    pub fn include_guard(&self) -> String {
        format!("{}_HPP", self.0.to_ascii_uppercase())
    }

    /// Name of the global instance in the composition file: `g_motor`.
    pub fn global_name(&self) -> String {
        format!("g_{}", self.0)
    }

    /// Name of the dispatch callback method: `serialCallbackMotorCommand`.
    pub fn callback_name(&self) -> String {
        format!("serialCallback{}Command", self.capitalized())
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ComponentName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ComponentName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentName> for String {
    fn from(value: ComponentName) -> Self {
        value.0
    }
}
