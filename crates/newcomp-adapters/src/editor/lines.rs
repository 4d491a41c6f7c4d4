//! Line-oriented view of a text file that writes back byte-for-byte.

/// A file split into lines, each remembering its own terminator.
///
/// Rendering an unmodified buffer yields the original bytes. Inserted lines
/// take `\r\n` when the file contains one anywhere, else `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
    eol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    eol: &'static str,
}

impl LineBuffer {
    pub fn parse(content: &str) -> Self {
        let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let lines = content
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(text) = raw.strip_suffix("\r\n") {
                    Line { text: text.to_string(), eol: "\r\n" }
                } else if let Some(text) = raw.strip_suffix('\n') {
                    Line { text: text.to_string(), eol: "\n" }
                } else {
                    Line { text: raw.to_string(), eol: "" }
                }
            })
            .collect();

        Self { lines, eol }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// Index of the first line containing `pattern`.
    pub fn find_first(&self, pattern: &str) -> Option<usize> {
        self.lines().position(|l| l.contains(pattern))
    }

    /// Index of the first line after `start` containing `pattern`.
    pub fn find_first_after(&self, start: usize, pattern: &str) -> Option<usize> {
        self.lines()
            .enumerate()
            .skip(start + 1)
            .find(|(_, l)| l.contains(pattern))
            .map(|(i, _)| i)
    }

    /// Index of the last line containing `pattern`.
    pub fn find_last(&self, pattern: &str) -> Option<usize> {
        self.lines.iter().rposition(|l| l.text.contains(pattern))
    }

    /// Index of the first line after `start` whose trimmed text equals `exact`.
    pub fn find_trimmed_after(&self, start: usize, exact: &str) -> Option<usize> {
        let exact = exact.trim();
        self.lines()
            .enumerate()
            .skip(start + 1)
            .find(|(_, l)| l.trim() == exact)
            .map(|(i, _)| i)
    }

    /// Insert `text` so that it becomes line `index`; indices past the end
    /// append. Returns the index actually used.
    pub fn insert(&mut self, index: usize, text: impl Into<String>) -> usize {
        let index = index.min(self.lines.len());
        if index == self.lines.len() {
            if let Some(last) = self.lines.last_mut() {
                if last.eol.is_empty() {
                    last.eol = self.eol;
                }
            }
        }
        self.lines.insert(
            index,
            Line {
                text: text.into(),
                eol: self.eol,
            },
        );
        index
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .flat_map(|l| [l.text.as_str(), l.eol])
            .collect()
    }
}
