use crate::document::Document;

use super::{BlockScan, LineClassifier, LineKind};

/// Validates locator output against the document it came from.
///
/// Asserts that:
/// - Regions are ordered, non-overlapping and within the document
/// - Each region starts on a marker line
/// - Each key lies strictly inside its region and is a key definition
/// - All keys of a region share the minimum candidate indentation
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document, classifier: &LineClassifier, scans: &[BlockScan]) {
    let n = doc.line_count();
    let mut prev_end = 0;

    for scan in scans {
        let r = scan.region;
        assert!(
            r.start < r.end && r.end <= n,
            "region out of bounds: {r:?} (line count: {n})"
        );
        assert!(
            r.start >= prev_end,
            "region {r:?} overlaps previous region ending at {prev_end}"
        );
        prev_end = r.end;

        let marker = doc.line(r.start).map(|l| classifier.kind_of(&l.text));
        assert_eq!(
            marker,
            Some(LineKind::BlockMarker),
            "region {r:?} does not start on a marker line"
        );

        let start_indent = doc.first_non_whitespace(r.start).unwrap_or(0);
        let min_indent = (r.start + 1..r.end)
            .filter_map(|i| doc.line(i))
            .filter(|l| l.indent > start_indent && classifier.is_key_definition(&l.text))
            .map(|l| l.indent)
            .min();

        for &key in &scan.keys {
            assert!(r.encloses(key), "key {key} outside region {r:?}");
            let line = doc.line(key).expect("key line exists");
            assert_eq!(
                classifier.kind_of(&line.text),
                LineKind::KeyDefinition,
                "key {key} is not a key definition: {:?}",
                line.text
            );
            assert_eq!(
                Some(line.indent),
                min_indent,
                "key {key} is not at the minimum indentation of {r:?}"
            );
        }
    }
}
