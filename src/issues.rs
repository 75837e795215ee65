//! Issue types for stylesheet analysis results.
//!
//! Each issue is self-contained with all information needed by the reporter
//! to display it (location, source context, rule tag) and by the clean
//! command to act on it (line spans).

use enum_dispatch::enum_dispatch;

use crate::core::{LineSpan, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnusedStyle,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnusedStyle => write!(f, "unused-style"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Style property declared in a `StyleSheet.create` table but never
/// accessed in its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedStyleIssue {
    pub context: SourceContext,
    /// The property name inside the table.
    pub key: String,
    /// The accessor that was searched for, e.g. `styles.box`.
    pub accessor: String,
    /// Lines the property declaration spans.
    pub span: LineSpan,
}

impl UnusedStyleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedStyle
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnusedStyle(UnusedStyleIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnusedStyle(_) => UnusedStyleIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnusedStyle(_) => UnusedStyleIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Where an issue points in the report.
pub enum ReportLocation<'a> {
    /// A position inside a file, with the source line for context display.
    Source(&'a SourceContext),
    /// A whole file (parse errors have no usable line context).
    File { path: &'a str },
}

/// Uniform interface the report functions consume.
///
/// Implemented by every issue type; `enum_dispatch` generates the
/// forwarding on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Where the issue points.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Extra context for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UnusedStyleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.accessor.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.span.line_count() > 1 {
            Some(format!(
                "declaration spans lines {}-{}",
                self.span.start, self.span.end
            ))
        } else {
            None
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Tests
// ============================================================
