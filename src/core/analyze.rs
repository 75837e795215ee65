use std::fs;

use anyhow::{Context, Result};

use crate::core::parser::parse_tsx_source;
use crate::core::sheet::locate_style_sheet;
use crate::core::usage::{LineSpan, UnusedStyle, find_unused_styles};

/// Analysis result for a single file: the located table (by name) and its
/// unused properties, together with the text snapshot the line spans were
/// computed against.
#[derive(Debug)]
pub struct FileReport {
    pub file_path: String,
    /// Variable name of the matched `StyleSheet.create` declaration, if any.
    pub style_name: Option<String>,
    pub unused: Vec<UnusedStyle>,
    /// The file text the spans refer to; edits must be applied to this
    /// snapshot, not to a re-read of the file.
    pub source: String,
}

impl FileReport {
    /// Spans to delete, in property declaration order.
    pub fn spans(&self) -> Vec<LineSpan> {
        self.unused.iter().map(|u| u.span).collect()
    }

    /// Total number of lines the deletion plan covers.
    pub fn planned_line_count(&self) -> usize {
        self.unused.iter().map(|u| u.span.line_count()).sum()
    }
}

/// Analyze source text already in memory.
///
/// Parse failures propagate; callers decide whether to surface them as
/// issues or abort.
pub fn analyze_source(source: String, file_path: &str) -> Result<FileReport> {
    let parsed = parse_tsx_source(source, file_path)?;
    let sheet = locate_style_sheet(&parsed.program);
    let unused = find_unused_styles(&sheet, &parsed.source, &parsed.source_map);
    Ok(FileReport {
        file_path: file_path.to_string(),
        style_name: sheet.name,
        unused,
        source: parsed.source,
    })
}

/// Read and analyze a file on disk.
pub fn analyze_file(file_path: &str) -> Result<FileReport> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    analyze_source(source, file_path)
}
