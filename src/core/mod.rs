//! Core analysis engine.
//!
//! Per file the pipeline is: parse the source into a syntax tree
//! ([`parser`]), locate the `StyleSheet.create` table among the top-level
//! declarations ([`sheet`]), detect which style properties are never
//! accessed in the file text ([`usage`]), and delete their line spans
//! ([`edit`]). [`analyze`] glues the read-only half together; [`scanner`]
//! discovers the files to process.

mod analyze;
mod edit;
mod parser;
mod scanner;
mod sheet;
mod source;
mod usage;

pub use analyze::{FileReport, analyze_file, analyze_source};
pub use edit::delete_line_spans;
pub use parser::{ParsedSource, parse_tsx_source};
pub use scanner::collect_source_files;
pub use sheet::{StyleSheetDecl, locate_style_sheet};
pub use source::{SourceContext, SourceLocation};
pub use usage::{LineSpan, UnusedStyle, find_unused_styles};
