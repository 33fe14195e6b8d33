use serde::Serialize;

/// Half-open line interval `[start, end)` of one style block.
///
/// `start` is the marker line. `end` is the terminator line, the line of a
/// marker that force-closed the block, or the document's line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BlockRegion {
    pub start: usize,
    pub end: usize,
}

impl BlockRegion {
    /// Number of lines in the region. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `line` lies strictly inside the block body.
    #[must_use]
    pub fn encloses(self, line: usize) -> bool {
        line > self.start && line < self.end
    }
}

/// One scanned block with its top-level key lines in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockScan {
    pub region: BlockRegion,
    pub keys: Vec<usize>,
}
