use std::sync::OnceLock;

use regex::Regex;
use crate::document::LineRef;

/// Entry name, colon, optional single-argument arrow, optional paren, then `{`.
///
/// Matches `key: {`, `"key": {`, `key: (props) => ({`, `"0%": {`.
pub const DEFAULT_KEY_PATTERN: &str = r#"^['"]?[^'":\s]+['"]?\s*:\s*(\(.*\)\s*=>\s*)?\(?\{"#;

/// Constructors that open a style block.
pub const DEFAULT_MARKERS: &[&str] = &["stylex.create", "stylex.keyframes"];

/// Trimmed lines equal to one of these close the block.
pub const DEFAULT_TERMINATORS: &[&str] = &["}"];

/// Trimmed lines starting with one of these close the block.
pub const DEFAULT_TERMINATOR_PREFIXES: &[&str] = &["});"];

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Invalid key pattern '{pattern}': {source}")]
    InvalidKeyPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Classification of a single line, decided from its own text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    BlockMarker,
    KeyDefinition,
    BlockTerminator,
    Other,
}

/// Local facts about one line: where it is, how deep, and what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub index: usize,
    pub indent: usize,
    pub kind: LineKind,
}

/// Tokens and patterns the classifier is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    pub markers: Vec<String>,
    pub terminators: Vec<String>,
    pub terminator_prefixes: Vec<String>,
    pub key_pattern: String,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            markers: to_owned(DEFAULT_MARKERS),
            terminators: to_owned(DEFAULT_TERMINATORS),
            terminator_prefixes: to_owned(DEFAULT_TERMINATOR_PREFIXES),
            key_pattern: DEFAULT_KEY_PATTERN.to_string(),
        }
    }
}

fn to_owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Classifies lines into [`LineKind`]s using marker substrings, terminator
/// tokens and the key-definition regex.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    markers: Vec<String>,
    terminators: Vec<String>,
    terminator_prefixes: Vec<String>,
    key_pattern: Regex,
}

impl LineClassifier {
    pub fn new(settings: ClassifierSettings) -> Result<Self, ClassifierError> {
        let key_pattern = Regex::new(&settings.key_pattern).map_err(|source| {
            ClassifierError::InvalidKeyPattern {
                pattern: settings.key_pattern.clone(),
                source,
            }
        })?;

        Ok(Self {
            markers: settings.markers,
            terminators: settings.terminators,
            terminator_prefixes: settings.terminator_prefixes,
            key_pattern,
        })
    }

    /// Classifies a line.
    ///
    /// Precedence is marker, blank, terminator, key, other. Markers are
    /// tested against the untrimmed text; everything else against the
    /// trimmed text.
    pub fn classify(&self, line: &LineRef) -> LineClass {
        LineClass {
            index: line.index,
            indent: line.indent,
            kind: self.kind_of(&line.text),
        }
    }

    pub fn kind_of(&self, text: &str) -> LineKind {
        if self.is_block_marker(text) {
            return LineKind::BlockMarker;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            LineKind::Blank
        } else if self.is_terminator(trimmed) {
            LineKind::BlockTerminator
        } else if self.is_key_definition(text) {
            LineKind::KeyDefinition
        } else {
            LineKind::Other
        }
    }

    pub fn is_block_marker(&self, text: &str) -> bool {
        self.markers.iter().any(|m| text.contains(m.as_str()))
    }

    fn is_terminator(&self, trimmed: &str) -> bool {
        self.terminators.iter().any(|t| trimmed == t)
            || self
                .terminator_prefixes
                .iter()
                .any(|p| trimmed.starts_with(p.as_str()))
    }

    /// A foldable key: matches the key pattern and its body stays open.
    ///
    /// `key: { opacity: 0.65 },` closes on its own line; folding it would
    /// collapse the enclosing block instead, so it is not a key here.
    pub fn is_key_definition(&self, text: &str) -> bool {
        self.key_pattern.is_match(text.trim()) && !text.contains('}')
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        static KEY_REGEX: OnceLock<Regex> = OnceLock::new();
        let key_pattern = KEY_REGEX
            .get_or_init(|| Regex::new(DEFAULT_KEY_PATTERN).expect("Invalid key regex"))
            .clone();

        Self {
            markers: to_owned(DEFAULT_MARKERS),
            terminators: to_owned(DEFAULT_TERMINATORS),
            terminator_prefixes: to_owned(DEFAULT_TERMINATOR_PREFIXES),
            key_pattern,
        }
    }
}
