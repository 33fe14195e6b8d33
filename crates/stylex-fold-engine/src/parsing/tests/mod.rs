//! Scenario tests for the locators.
//!
//! Every scan result is also run through `invariants::check`.

use pretty_assertions::assert_eq;

use crate::document::Document;
use crate::parsing::{
    BlockRegion, LineClassifier, invariants, locate_block_lines, locate_key_lines, scan_blocks,
};

const STYLES: &str = "\
const styles = stylex.create({
  container: {
    color: 'red',
  },
  itemCompleted: { opacity: 0.65 },
  label: {
    fontSize: 12,
  },
});
";

fn keys(src: &str) -> Vec<usize> {
    let doc = Document::new(src);
    let classifier = LineClassifier::default();
    let scans = scan_blocks(&doc, &classifier);
    invariants::check(&doc, &classifier, &scans);
    locate_key_lines(&doc, &classifier)
}

fn blocks(src: &str) -> Vec<usize> {
    locate_block_lines(&Document::new(src), &LineClassifier::default())
}

#[test]
fn basic_block_and_keys() {
    assert_eq!(blocks(STYLES), vec![0]);
    assert_eq!(keys(STYLES), vec![1, 5]);
}

#[test]
fn single_line_entry_is_never_a_key() {
    assert!(!keys(STYLES).contains(&4));
}

#[test]
fn empty_document() {
    assert!(blocks("").is_empty());
    assert!(keys("").is_empty());
}

#[test]
fn document_without_markers() {
    let src = "const theme = {\n  container: {\n    color: 'red',\n  },\n};\n";
    assert!(blocks(src).is_empty());
    assert!(keys(src).is_empty());
}

#[test]
fn blank_lines_inside_block() {
    let src = "\
const styles = stylex.create({
  container: {
    color: 'red',
  },

  label: {

    fontSize: 12,
  },
});
";
    assert_eq!(keys(src), vec![1, 5]);
}

#[test]
fn nested_keys_are_excluded() {
    let src = "\
const styles = stylex.create({
  button: {
    ':hover': {
      color: 'blue',
    },
    '@media (max-width: 600px)': {
      padding: 4,
    },
  },
  link: {
    color: {
      default: 'black',
    },
  },
});
";
    assert_eq!(keys(src), vec![1, 9]);
}

#[test]
fn arrow_function_keys() {
    let src = "\
export const styles = stylex.create({
  dynamic: (color) => ({
    color,
  }),
  static: {
    color: 'red',
  },
});
";
    assert_eq!(keys(src), vec![1, 4]);
}

#[test]
fn keyframes_with_quoted_percent_keys() {
    let src = "\
const fadeIn = stylex.keyframes({
  '0%': {
    opacity: 0,
  },
  \"100%\": {
    opacity: 1,
  },
});
";
    assert_eq!(blocks(src), vec![0]);
    assert_eq!(keys(src), vec![1, 4]);
}

#[test]
fn two_sibling_blocks_are_independent() {
    let src = "\
const a = stylex.create({
  root: {
    color: 'red',
  },
});

const b = stylex.create({
    wide: {
      width: '100%',
    },
    tall: {
      height: '100%',
    },
});
";
    let doc = Document::new(src);
    let classifier = LineClassifier::default();
    let scans = scan_blocks(&doc, &classifier);
    invariants::check(&doc, &classifier, &scans);

    assert_eq!(blocks(src), vec![0, 6]);
    assert_eq!(scans.len(), 2);
    assert_eq!(scans[0].region, BlockRegion { start: 0, end: 4 });
    assert_eq!(scans[0].keys, vec![1]);
    assert_eq!(scans[1].region, BlockRegion { start: 6, end: 13 });
    assert_eq!(scans[1].keys, vec![7, 10]);
}

#[test]
fn unterminated_block_flushes_at_end_of_document() {
    let src = "\
const styles = stylex.create({
  container: {
    color: 'red',
  },
  label: {
    fontSize: 12,";
    let doc = Document::new(src);
    let scans = scan_blocks(&doc, &LineClassifier::default());

    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].region, BlockRegion { start: 0, end: 6 });
    assert_eq!(keys(src), vec![1, 4]);
}

#[test]
fn marker_inside_open_block_force_closes_it() {
    let src = "\
const a = stylex.create({
  root: {
    color: 'red',
  },
  const b = stylex.create({
    inner: {
      color: 'blue',
    },
  });
";
    let doc = Document::new(src);
    let classifier = LineClassifier::default();
    let scans = scan_blocks(&doc, &classifier);
    invariants::check(&doc, &classifier, &scans);

    assert_eq!(scans.len(), 2);
    assert_eq!(scans[0].region, BlockRegion { start: 0, end: 4 });
    assert_eq!(scans[0].keys, vec![1]);
    assert_eq!(scans[1].keys, vec![5]);
}

#[test]
fn indented_block_closes_on_dedent() {
    let src = "\
function make() {
  const styles = stylex.create({
    root: {
      color: 'red',
    },
  });
  return styles;
}
";
    assert_eq!(blocks(src), vec![1]);
    assert_eq!(keys(src), vec![2]);
}

#[test]
fn keys_at_or_above_marker_indent_close_the_block() {
    // Written without a line continuation so the marker keeps its indent
    let src = concat!(
        "    const styles = stylex.create({\n",
        "  misplaced: {\n",
        "    color: 'red',\n",
        "  },\n",
        "    });\n",
    );
    let doc = Document::new(src);
    assert_eq!(doc.first_non_whitespace(0), Some(4));
    assert!(keys(src).is_empty());

    let classifier = LineClassifier::default();
    let scans = scan_blocks(&doc, &classifier);
    assert_eq!(scans[0].region, BlockRegion { start: 0, end: 1 });
}

#[test]
fn only_spaces_and_tabs_count_as_indentation() {
    // U+3000 ideographic space does not indent the key
    let src = "const styles = stylex.create({\n\u{3000}\u{3000}key: {\n    color: 'red',\n  },\n});\n";
    assert_eq!(Document::new(src).first_non_whitespace(1), Some(0));
    assert!(keys(src).is_empty());
}

#[test]
fn locators_are_idempotent() {
    let doc = Document::new(STYLES);
    let classifier = LineClassifier::default();
    assert_eq!(
        locate_key_lines(&doc, &classifier),
        locate_key_lines(&doc, &classifier)
    );
    assert_eq!(
        locate_block_lines(&doc, &classifier),
        locate_block_lines(&doc, &classifier)
    );
}
