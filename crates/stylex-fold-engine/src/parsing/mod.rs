//! # Block and Key Location
//!
//! Heuristic, indentation-based detection of StyleX style blocks and the
//! top-level keys directly inside them. No JavaScript parser is involved.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    text into a `LineClass` (marker, key, terminator, blank, other) plus its
//!    indentation.
//!
//! 2. **Key Collection** (`collector`): a `KeyCollector` state machine walks the
//!    classes in order, opens a block on each marker, buffers key candidates and
//!    keeps the shallowest ones when the block closes.
//!
//! ## Key Invariants
//!
//! - Every reported key lies strictly inside its block region
//! - All keys of a block share the minimum indentation among its candidates
//! - Blank lines never close a block
//! - Both locators are pure: same document, same output

pub mod classify;
pub mod collector;
pub mod invariants;
pub mod types;

pub use classify::{ClassifierError, ClassifierSettings, LineClass, LineClassifier, LineKind};
pub use collector::KeyCollector;
pub use types::{BlockRegion, BlockScan};

use crate::document::Document;

/// Lines containing a block marker, ascending.
pub fn locate_block_lines(doc: &Document, classifier: &LineClassifier) -> Vec<usize> {
    doc.lines()
        .filter(|line| classifier.is_block_marker(&line.text))
        .map(|line| line.index)
        .collect()
}

/// Top-level key lines across all blocks, in document order.
pub fn locate_key_lines(doc: &Document, classifier: &LineClassifier) -> Vec<usize> {
    scan_blocks(doc, classifier)
        .into_iter()
        .flat_map(|scan| scan.keys)
        .collect()
}

/// Every block region with its top-level keys.
pub fn scan_blocks(doc: &Document, classifier: &LineClassifier) -> Vec<BlockScan> {
    let mut collector = KeyCollector::new();

    for line in doc.lines() {
        collector.push(&classifier.classify(line));
    }

    collector.finish()
}

#[cfg(test)]
mod tests;
