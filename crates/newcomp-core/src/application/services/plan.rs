//! What a run is going to do, and what it did.
//!
//! A [`MaterializePlan`] is computed without side effects. Applying it
//! yields a [`MaterializeReport`] listing the same steps, unless a generated
//! file appeared in between.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Category, ComponentSpec, GeneratedFile, TextEdit};

/// Fate of one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum FileAction {
    Create(GeneratedFile),
    Skip { path: PathBuf },
}

impl FileAction {
    pub fn path(&self) -> &Path {
        match self {
            Self::Create(file) => &file.path,
            Self::Skip { path } => path,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create(_))
    }
}

/// Whole-file rewrite of a collaborator file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEdit {
    pub path: PathBuf,
    #[serde(flatten)]
    pub edit: TextEdit,
    /// Content the edit was computed from.
    #[serde(skip)]
    pub original: String,
}

/// Text appended to the end of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingAppend {
    pub path: PathBuf,
    pub lines: Vec<String>,
    #[serde(skip)]
    pub text: String,
}

/// How the category relates to the build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CategoryRegistration {
    /// Listed in the known categories; the build file is not touched.
    Known,
    /// Not a known category but the build file already globs it.
    AlreadyRegistered { path: PathBuf },
    /// Source glob and include directory get inserted.
    Register(PendingEdit),
}

/// Every side effect of one run, computed up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializePlan {
    pub spec: ComponentSpec,
    pub category: CategoryRegistration,
    pub directories: Vec<PathBuf>,
    pub header: FileAction,
    pub aggregate: Option<PendingAppend>,
    pub source: FileAction,
    pub composition: Option<PendingEdit>,
}

impl MaterializePlan {
    /// Steps in the order `apply` performs them, assuming nothing on disk
    /// changes in between.
    pub fn steps(&self) -> Vec<StepOutcome> {
        let mut steps = Vec::new();
        let category = self.spec.category();

        match &self.category {
            CategoryRegistration::Known => {}
            CategoryRegistration::AlreadyRegistered { path } => {
                steps.push(StepOutcome::CategoryAlreadyRegistered {
                    category: category.clone(),
                    path: path.clone(),
                });
            }
            CategoryRegistration::Register(pending) => {
                steps.push(StepOutcome::CategoryRegistered {
                    category: category.clone(),
                    path: pending.path.clone(),
                    lines: pending.edit.inserted_lines(),
                });
            }
        }

        steps.extend(
            self.directories
                .iter()
                .map(|path| StepOutcome::DirectoryCreated { path: path.clone() }),
        );

        steps.push(file_step(&self.header));
        if let Some(append) = &self.aggregate {
            steps.push(StepOutcome::Appended {
                path: append.path.clone(),
                lines: append.lines.len(),
            });
        }

        steps.push(file_step(&self.source));
        if let Some(pending) = &self.composition {
            steps.push(StepOutcome::Wired {
                path: pending.path.clone(),
                lines: pending.edit.inserted_lines(),
            });
        }

        steps
    }

    /// True when applying would not change anything on disk.
    pub fn is_noop(&self) -> bool {
        !self.header.is_create()
            && !self.source.is_create()
            && self.directories.is_empty()
            && !matches!(self.category, CategoryRegistration::Register(_))
    }
}

fn file_step(action: &FileAction) -> StepOutcome {
    match action {
        FileAction::Create(file) => StepOutcome::Created {
            path: file.path.clone(),
        },
        FileAction::Skip { path } => StepOutcome::AlreadyExists { path: path.clone() },
    }
}

/// One status line of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum StepOutcome {
    CategoryRegistered {
        category: Category,
        path: PathBuf,
        lines: usize,
    },
    CategoryAlreadyRegistered {
        category: Category,
        path: PathBuf,
    },
    DirectoryCreated {
        path: PathBuf,
    },
    Created {
        path: PathBuf,
    },
    AlreadyExists {
        path: PathBuf,
    },
    Appended {
        path: PathBuf,
        lines: usize,
    },
    Wired {
        path: PathBuf,
        lines: usize,
    },
}

impl StepOutcome {
    /// Informational steps (nothing was written).
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::AlreadyExists { .. } | Self::CategoryAlreadyRegistered { .. }
        )
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryRegistered {
                category,
                path,
                lines,
            } => write!(
                f,
                "Registered category '{category}' in {} ({lines} lines)",
                path.display()
            ),
            Self::CategoryAlreadyRegistered { category, path } => write!(
                f,
                "Category '{category}' already registered in {}",
                path.display()
            ),
            Self::DirectoryCreated { path } => write!(f, "Directory: {}", path.display()),
            Self::Created { path } => write!(f, "Created: {}", path.display()),
            Self::AlreadyExists { path } => write!(f, "File already exists: {}", path.display()),
            Self::Appended { path, lines } => {
                write!(f, "Appended {lines} lines to {}", path.display())
            }
            Self::Wired { path, lines } => {
                write!(f, "Inserted {lines} lines into {}", path.display())
            }
        }
    }
}

/// Result of applying a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub component: ComponentSpec,
    pub steps: Vec<StepOutcome>,
}

impl MaterializeReport {
    pub fn created_files(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, StepOutcome::Created { .. }))
            .count()
    }
}
