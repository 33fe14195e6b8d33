pub mod document;
pub mod folding;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use document::{Document, LineRef};
pub use folding::{
    FoldAction, FoldIntent, FoldRange, FoldRequest, FoldView, IntentParseError, RegionActuator,
    UNBOUNDED_DEPTH, VisibleLine, apply, detect_fold_ranges, plan, view::FOLD_MARKER,
};
pub use io::*;
pub use parsing::{
    BlockRegion, BlockScan, ClassifierError, ClassifierSettings, LineClass, LineClassifier,
    LineKind, locate_block_lines, locate_key_lines, scan_blocks,
};
