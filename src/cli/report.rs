//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Separate from core logic so
//! destyle can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CleanSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SourceContext;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Mark printed in front of success lines.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Mark printed in front of the problem summary.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Line-number gutter is sized to the largest line number on display
    let gutter = line_number_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, gutter);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} source {} - no unused styles found",
        source_files,
        if source_files == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, gutter: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => print_source_context(ctx, severity, writer, gutter),
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = gutter
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_source_context<W: Write>(
    ctx: &SourceContext,
    severity: Severity,
    writer: &mut W,
    gutter: usize,
) {
    let line = ctx.line();
    let source_line = &ctx.source_line;

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        ctx.file_path(),
        line,
        ctx.col()
    );

    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = gutter);
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = gutter
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = source_line.chars().take(ctx.col().saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = gutter,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn location_sort_key<'a>(issue: &'a Issue) -> (&'a str, usize, usize) {
    match issue.location() {
        ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    location_sort_key(a).cmp(&location_sort_key(b))
}

fn line_number_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result.source_files_checked);
            } else {
                report(&result.issues);
            }
        }
        CommandSummary::Clean(summary) => print_clean(summary, result),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_clean(summary: &CleanSummary, result: &CommandResult) {
    if summary.is_apply {
        // Parse errors still get reported; the affected files were skipped.
        if !result.issues.is_empty() {
            report(&result.issues);
        }
        println!("delete {} lines^_^!", summary.line_count);
        return;
    }

    if !result.issues.is_empty() {
        report(&result.issues);
    }

    if summary.unused_count > 0 {
        println!(
            "{} {} line(s) for {} unused style(s) in {} file(s).",
            "Would delete".yellow().bold(),
            summary.line_count,
            summary.unused_count,
            summary.file_count
        );
        println!("Run with {} to delete these lines.", "--apply".cyan());
    } else if result.issues.is_empty() {
        print_success(result.source_files_checked);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
