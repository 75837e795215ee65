//! Line-range deletion over a text snapshot.

use std::collections::HashSet;

use crate::core::usage::LineSpan;

/// Delete every line covered by `spans` from `source`.
///
/// Lines are 1-indexed and deleted with their full extent including the
/// trailing line terminator. Line numbers beyond the end of the document
/// are ignored. Returns the edited text and the number of lines deleted.
pub fn delete_line_spans(source: &str, spans: &[LineSpan]) -> (String, usize) {
    let mut doomed: HashSet<usize> = HashSet::new();
    for span in spans {
        for line in span.start..=span.end {
            doomed.insert(line);
        }
    }

    if doomed.is_empty() {
        return (source.to_string(), 0);
    }

    let mut result = String::with_capacity(source.len());
    let mut deleted = 0;
    for (idx, line) in source.split_inclusive('\n').enumerate() {
        if doomed.contains(&(idx + 1)) {
            deleted += 1;
        } else {
            result.push_str(line);
        }
    }
    (result, deleted)
}
