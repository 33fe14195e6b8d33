//! # Document Snapshot
//!
//! A read-only, line-addressable view over source text. The text is held in an
//! `xi_rope::Rope` and the line index (text without terminator plus the first
//! non-whitespace column) is built once at construction, so every scan over
//! the same `Document` sees identical lines.

pub mod lines;

pub use lines::{LineRef, index_lines};

use xi_rope::Rope;

/// Immutable snapshot of a source document.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    lines: Vec<LineRef>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self::from_rope(Rope::from(text))
    }

    pub fn from_rope(rope: Rope) -> Self {
        let lines = index_lines(&rope).collect();
        Self { rope, lines }
    }

    /// Number of lines. A trailing newline does not start an extra line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&LineRef> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineRef> {
        self.lines.iter()
    }

    /// Column of the first character on `index` that is not a space or tab.
    ///
    /// For a blank line this is the line's length in characters.
    pub fn first_non_whitespace(&self, index: usize) -> Option<usize> {
        self.lines.get(index).map(|l| l.indent)
    }

    /// The full text as an owned `String`.
    pub fn text(&self) -> String {
        self.rope.slice_to_cow(..).into_owned()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
