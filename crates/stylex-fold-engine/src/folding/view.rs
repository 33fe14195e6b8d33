use std::collections::BTreeSet;

use crate::document::Document;

use super::{
    RegionActuator,
    ranges::{FoldRange, detect_fold_ranges},
};

/// Suffix shown after the header of a collapsed range.
pub const FOLD_MARKER: &str = " ⋯";

/// One line as presented after folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine<'a> {
    pub index: usize,
    pub text: &'a str,
    /// The line heads a collapsed range.
    pub folded: bool,
}

/// In-memory fold state over a document, driven through [`RegionActuator`].
///
/// Tracks collapsed ranges by their start line, the same way an editor
/// gutter does.
#[derive(Debug, Clone)]
pub struct FoldView {
    lines: Vec<String>,
    ranges: Vec<FoldRange>,
    collapsed: BTreeSet<usize>,
}

impl FoldView {
    pub fn new(doc: &Document) -> Self {
        Self {
            lines: doc.lines().map(|l| l.text.clone()).collect(),
            ranges: detect_fold_ranges(doc),
            collapsed: BTreeSet::new(),
        }
    }

    pub fn ranges(&self) -> &[FoldRange] {
        &self.ranges
    }

    /// Returns `true` when the range starting at `start_line` is collapsed.
    pub fn is_folded(&self, start_line: usize) -> bool {
        self.collapsed.contains(&start_line)
    }

    /// Start lines of collapsed ranges, ascending.
    pub fn collapsed_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.collapsed.iter().copied()
    }

    pub fn fold_all(&mut self) {
        self.collapsed.extend(self.ranges.iter().map(|r| r.start_line));
    }

    pub fn unfold_all(&mut self) {
        self.collapsed.clear();
    }

    /// Lines that remain on screen, with collapsed headers flagged.
    pub fn visible_lines(&self) -> Vec<VisibleLine<'_>> {
        let mut hidden = vec![false; self.lines.len()];
        for range in self.ranges.iter().filter(|r| self.is_folded(r.start_line)) {
            for flag in hidden
                .iter_mut()
                .take(range.end_line + 1)
                .skip(range.start_line + 1)
            {
                *flag = true;
            }
        }

        self.lines
            .iter()
            .enumerate()
            .filter(|(i, _)| !hidden[*i])
            .map(|(index, text)| VisibleLine {
                index,
                text: text.as_str(),
                folded: self.is_folded(index),
            })
            .collect()
    }

    /// The folded presentation as text, one line per visible line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.visible_lines() {
            out.push_str(line.text);
            if line.folded {
                out.push_str(FOLD_MARKER);
            }
            out.push('\n');
        }
        out
    }

    /// The range a request for `line` acts on: the one starting there, else
    /// the innermost one containing it.
    fn target(&self, line: usize) -> Option<FoldRange> {
        self.ranges
            .iter()
            .find(|r| r.start_line == line)
            .or_else(|| {
                self.ranges
                    .iter()
                    .filter(|r| r.contains_line(line))
                    .max_by_key(|r| r.start_line)
            })
            .copied()
    }

    /// Start lines of `target` and of ranges nested under it less than `depth` levels deep.
    fn affected(&self, target: FoldRange, depth: usize) -> Vec<usize> {
        if depth == 0 {
            return vec![];
        }

        let family: Vec<&FoldRange> = self
            .ranges
            .iter()
            .filter(|r| **r == target || target.encloses(r))
            .collect();

        family
            .iter()
            .filter(|r| {
                let level = family.iter().filter(|q| q.encloses(r)).count();
                level < depth
            })
            .map(|r| r.start_line)
            .collect()
    }

    fn affected_by(&self, lines: &[usize], depth: usize) -> Vec<usize> {
        lines
            .iter()
            .filter_map(|&line| self.target(line))
            .flat_map(|target| self.affected(target, depth))
            .collect()
    }
}

impl RegionActuator for FoldView {
    fn fold(&mut self, lines: &[usize], depth: usize) {
        let starts = self.affected_by(lines, depth);
        self.collapsed.extend(starts);
    }

    fn unfold(&mut self, lines: &[usize], depth: usize) {
        for start in self.affected_by(lines, depth) {
            self.collapsed.remove(&start);
        }
    }
}
