use std::ops::Range;

use xi_rope::Rope;

/// A single line of a document with its derived indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Zero-based line number.
    pub index: usize,
    /// Byte range of this line in the rope (includes newline if present).
    pub span: Range<usize>,
    /// Line text with the `\n` / `\r\n` terminator stripped.
    pub text: String,
    /// Leading spaces and tabs, counted in characters.
    pub indent: usize,
}

impl LineRef {
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Returns an iterator over the lines of `rope` with their spans and indentation.
///
/// Uses `lines_raw` so byte spans account for newline characters.
pub fn index_lines(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, line)| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\r', '\n']).to_string();
        let indent = text.chars().take_while(|c| matches!(c, ' ' | '\t')).count();
        LineRef {
            index,
            span: start..offset,
            text,
            indent,
        }
    })
}
