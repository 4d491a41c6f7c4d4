use std::fmt;

use serde::Serialize;

/// What an inserted line is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionKind {
    SourceGlob,
    IncludeDirectory,
    Instance,
    DispatchEntry,
    TaskEntry,
}

impl InsertionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SourceGlob => "source glob",
            Self::IncludeDirectory => "include directory",
            Self::Instance => "global instance",
            Self::DispatchEntry => "dispatch entry",
            Self::TaskEntry => "periodic task entry",
        }
    }
}

impl fmt::Display for InsertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inserted line. `line` is 1-based and refers to the edited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub kind: InsertionKind,
    pub line: usize,
    pub text: String,
}

/// The full new content of an edited file plus what was inserted into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    #[serde(skip)]
    pub content: String,
    pub insertions: Vec<Insertion>,
}

impl TextEdit {
    pub fn inserted_lines(&self) -> usize {
        self.insertions.len()
    }
}
