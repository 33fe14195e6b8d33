//! # Fold Intents
//!
//! Maps the four user-facing intents onto locator output and a fold depth,
//! and hands the result to a [`RegionActuator`]. The actuator is whatever
//! owns the visual presentation (an editor, or the in-memory [`FoldView`]).
//!
//! | Intent         | Lines from            | Action | Depth                |
//! |----------------|-----------------------|--------|----------------------|
//! | `fold-names`   | `locate_key_lines`    | fold   | 1                    |
//! | `fold-blocks`  | `locate_block_lines`  | fold   | 1                    |
//! | `unfold-names` | `locate_block_lines`  | unfold | 1                    |
//! | `unfold-all`   | `locate_block_lines`  | unfold | [`UNBOUNDED_DEPTH`]  |
//!
//! An empty line set never reaches the actuator.

pub mod ranges;
pub mod view;

pub use ranges::{FoldRange, detect_fold_ranges};
pub use view::{FoldView, VisibleLine};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::document::Document;
use crate::parsing::{LineClassifier, locate_block_lines, locate_key_lines};

/// Depth used for "unfold everything"; matches what editors accept as all levels.
pub const UNBOUNDED_DEPTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoldIntent {
    /// Collapse style bodies, leaving `key: { ⋯` visible.
    FoldNames,
    /// Collapse whole `stylex.create` / `stylex.keyframes` blocks.
    FoldBlocks,
    /// Expand blocks one level so key names show again.
    UnfoldNames,
    /// Expand blocks and everything inside them.
    UnfoldAll,
}

impl FoldIntent {
    pub const ALL: [FoldIntent; 4] = [
        FoldIntent::FoldNames,
        FoldIntent::FoldBlocks,
        FoldIntent::UnfoldNames,
        FoldIntent::UnfoldAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FoldIntent::FoldNames => "fold-names",
            FoldIntent::FoldBlocks => "fold-blocks",
            FoldIntent::UnfoldNames => "unfold-names",
            FoldIntent::UnfoldAll => "unfold-all",
        }
    }
}

impl fmt::Display for FoldIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown fold intent '{0}' (expected fold-names, fold-blocks, unfold-names or unfold-all)")]
pub struct IntentParseError(pub String);

impl FromStr for FoldIntent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoldIntent::ALL
            .into_iter()
            .find(|intent| intent.label() == s)
            .ok_or_else(|| IntentParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldAction {
    Fold,
    Unfold,
}

/// A non-empty set of header lines plus how many nested levels to affect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldRequest {
    pub action: FoldAction,
    pub lines: Vec<usize>,
    pub depth: usize,
}

impl FoldRequest {
    pub fn dispatch<A: RegionActuator + ?Sized>(&self, actuator: &mut A) {
        match self.action {
            FoldAction::Fold => actuator.fold(&self.lines, self.depth),
            FoldAction::Unfold => actuator.unfold(&self.lines, self.depth),
        }
    }
}

/// Collapses or expands the regions whose headers start at the given lines.
///
/// Callers never pass an empty line set.
pub trait RegionActuator {
    fn fold(&mut self, lines: &[usize], depth: usize);

    fn unfold(&mut self, lines: &[usize], depth: usize);
}

/// Plans `intent` against `doc`. Returns `None` when there is nothing to act on.
pub fn plan(intent: FoldIntent, doc: &Document, classifier: &LineClassifier) -> Option<FoldRequest> {
    let (action, lines, depth) = match intent {
        FoldIntent::FoldNames => (FoldAction::Fold, locate_key_lines(doc, classifier), 1),
        FoldIntent::FoldBlocks => (FoldAction::Fold, locate_block_lines(doc, classifier), 1),
        FoldIntent::UnfoldNames => (FoldAction::Unfold, locate_block_lines(doc, classifier), 1),
        FoldIntent::UnfoldAll => (
            FoldAction::Unfold,
            locate_block_lines(doc, classifier),
            UNBOUNDED_DEPTH,
        ),
    };

    if lines.is_empty() {
        log::debug!("{intent}: no matching lines, nothing to do");
        return None;
    }

    log::debug!("{intent}: {action:?} {} line(s) at depth {depth}", lines.len());
    Some(FoldRequest {
        action,
        lines,
        depth,
    })
}

/// Plans `intent` and dispatches it to `actuator`. Returns whether anything was dispatched.
pub fn apply<A: RegionActuator + ?Sized>(
    intent: FoldIntent,
    doc: &Document,
    classifier: &LineClassifier,
    actuator: &mut A,
) -> bool {
    match plan(intent, doc, classifier) {
        Some(request) => {
            request.dispatch(actuator);
            true
        }
        None => false,
    }
}
