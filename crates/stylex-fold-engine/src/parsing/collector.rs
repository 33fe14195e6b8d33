use super::{
    classify::{LineClass, LineKind},
    types::{BlockRegion, BlockScan},
};

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Outside,
    InsideBlock { start: usize, start_indent: usize },
}

/// A key line waiting for its block to close before the shallowest indent is known.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    line: usize,
    indent: usize,
}

/// Single forward pass that finds blocks and their top-level keys.
///
/// Feed every line of the document through [`push`](Self::push) in order,
/// then call [`finish`](Self::finish). Keys are buffered while a block is
/// open; when it closes only the candidates at the minimum indentation are
/// kept.
pub struct KeyCollector {
    state: ScanState,
    candidates: Vec<Candidate>,
    next_line: usize,
    out: Vec<BlockScan>,
}

impl KeyCollector {
    pub fn new() -> Self {
        Self {
            state: ScanState::Outside,
            candidates: vec![],
            next_line: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        self.next_line = c.index + 1;

        if c.kind == LineKind::BlockMarker {
            // A marker inside an open block closes that block first.
            self.close_block(c.index);
            self.open_block(c);
            return;
        }

        let ScanState::InsideBlock { start_indent, .. } = self.state else {
            return;
        };

        match c.kind {
            // Blank lines never count as an indentation drop.
            LineKind::Blank => {}
            _ if c.indent <= start_indent || c.kind == LineKind::BlockTerminator => {
                self.close_block(c.index);
            }
            LineKind::KeyDefinition => self.candidates.push(Candidate {
                line: c.index,
                indent: c.indent,
            }),
            _ => {}
        }
    }

    pub fn finish(mut self) -> Vec<BlockScan> {
        // EOF flush
        self.close_block(self.next_line);
        self.out
    }

    fn open_block(&mut self, c: &LineClass) {
        log::debug!("block opened at line {} (indent {})", c.index, c.indent);
        self.state = ScanState::InsideBlock {
            start: c.index,
            start_indent: c.indent,
        };
        self.candidates.clear();
    }

    fn close_block(&mut self, end: usize) {
        let prev = std::mem::replace(&mut self.state, ScanState::Outside);
        if let ScanState::InsideBlock { start, .. } = prev {
            let keys = self.flush_candidates();
            log::debug!(
                "block {start}..{end} closed with {} top-level key(s)",
                keys.len()
            );
            self.out.push(BlockScan {
                region: BlockRegion { start, end },
                keys,
            });
        }
    }

    fn flush_candidates(&mut self) -> Vec<usize> {
        let candidates = std::mem::take(&mut self.candidates);
        let Some(min_indent) = candidates.iter().map(|c| c.indent).min() else {
            return vec![];
        };
        candidates
            .into_iter()
            .filter(|c| c.indent == min_indent)
            .map(|c| c.line)
            .collect()
    }
}

impl Default for KeyCollector {
    fn default() -> Self {
        Self::new()
    }
}
