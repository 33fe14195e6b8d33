//! Indentation-based fold range detection.
//!
//! A non-blank line heads a range when the next non-blank line is indented
//! deeper. The range runs to the last non-blank line before indentation
//! returns to the header's level, so a closing `},` stays visible.

use std::cmp::Reverse;
use std::ops::Range;

use serde::Serialize;

use crate::document::Document;

/// A foldable range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldRange {
    /// Header line (0-based), stays visible when folded.
    pub start_line: usize,
    /// Last hidden line (0-based, inclusive).
    pub end_line: usize,
}

impl FoldRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    pub fn line_range(&self) -> Range<usize> {
        self.start_line..self.end_line + 1
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// True if `other` is nested strictly inside this range.
    pub fn encloses(&self, other: &FoldRange) -> bool {
        other.start_line > self.start_line && other.end_line <= self.end_line
    }
}

/// Detects every fold range, outermost first for equal start lines.
pub fn detect_fold_ranges(doc: &Document) -> Vec<FoldRange> {
    let mut ranges = Vec::new();
    // Open headers as (line, indent), indentation strictly increasing.
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut last_content: Option<usize> = None;

    for line in doc.lines().filter(|l| !l.is_blank()) {
        while let Some(&(start, indent)) = open.last() {
            if line.indent > indent {
                break;
            }
            open.pop();
            close(start, last_content, &mut ranges);
        }
        open.push((line.index, line.indent));
        last_content = Some(line.index);
    }

    while let Some((start, _)) = open.pop() {
        close(start, last_content, &mut ranges);
    }

    ranges.sort_by_key(|r| (r.start_line, Reverse(r.end_line)));
    ranges
}

fn close(start: usize, last_content: Option<usize>, ranges: &mut Vec<FoldRange>) {
    if let Some(end) = last_content
        && end > start
    {
        ranges.push(FoldRange::new(start, end));
    }
}
