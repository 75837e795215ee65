//! Unused style property detection.
//!
//! The check is purely textual: a property `key` of the table declared as
//! `styles` counts as used when the substring `styles.key` occurs anywhere
//! in the file text, including inside comments, string literals, or the
//! table's own source block. No semantic reference analysis is performed.

use swc_common::{BytePos, SourceMap, Spanned};
use swc_ecma_ast::{Prop, PropName, PropOrSpread};

use crate::core::sheet::StyleSheetDecl;

/// A 1-indexed, inclusive range of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered by the span.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A style property never accessed as `<name>.<key>` in its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedStyle {
    /// The property name inside the table.
    pub key: String,
    /// The accessor string that was searched for, e.g. `styles.box`.
    pub accessor: String,
    /// Lines spanned by the property's declaration, value included.
    pub span: LineSpan,
    /// 1-based column of the property key.
    pub col: usize,
    /// Content of the line the key sits on, for display.
    pub source_line: String,
}

/// Find the style properties of `sheet` that are never referenced in `source`.
///
/// An absent table (missing name or missing object literal) produces an
/// empty result. Properties are inspected in declaration order, so the
/// returned spans are ordered by position. Only identifier-named entries
/// participate; string keys, computed keys and spreads are not named style
/// properties.
pub fn find_unused_styles(
    sheet: &StyleSheetDecl,
    source: &str,
    source_map: &SourceMap,
) -> Vec<UnusedStyle> {
    let (Some(name), Some(object)) = (&sheet.name, &sheet.object) else {
        return Vec::new();
    };

    let mut unused = Vec::new();
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Some((key, lo, hi)) = prop_entry(prop) else {
            continue;
        };

        let accessor = format!("{}.{}", name, key);
        if source.contains(&accessor) {
            continue;
        }

        let start = source_map.lookup_char_pos(lo);
        let end = source_map.lookup_char_pos(hi);
        let source_line = start
            .file
            .get_line(start.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        unused.push(UnusedStyle {
            key,
            accessor,
            span: LineSpan::new(start.line, end.line),
            col: start.col_display + 1,
            source_line,
        });
    }

    unused
}

/// The identifier key and full extent (key start to value end) of a named
/// property entry.
fn prop_entry(prop: &Prop) -> Option<(String, BytePos, BytePos)> {
    match prop {
        Prop::KeyValue(kv) => match &kv.key {
            PropName::Ident(id) => {
                Some((id.sym.to_string(), kv.key.span().lo, kv.value.span().hi))
            }
            _ => None,
        },
        Prop::Shorthand(id) => Some((id.sym.to_string(), id.span.lo, id.span.hi)),
        _ => None,
    }
}
