use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::glob;
use rayon::prelude::*;

use super::{CommandResult, CommandSummary};
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::core::{FileReport, SourceContext, SourceLocation, analyze_file, collect_source_files};
use crate::issues::{Issue, ParseErrorIssue, Severity, UnusedStyleIssue};

/// Everything the check and clean commands share: config resolution, file
/// discovery and per-file analysis.
pub struct ProjectAnalysis {
    pub reports: Vec<FileReport>,
    pub parse_errors: Vec<ParseErrorIssue>,
    pub file_count: usize,
}

pub fn analyze_project(paths: &[PathBuf], common: &CommonArgs) -> Result<ProjectAnalysis> {
    let config = Config::load(Path::new("."))?;
    let source_root = common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));

    let roots: Vec<PathBuf> = if paths.is_empty() {
        let mut roots: Vec<PathBuf> = Vec::new();
        for inc in &config.includes {
            if inc.contains('*') || inc.contains('?') {
                // Glob include: expand to matching directories
                let pattern = source_root.join(inc);
                if let Ok(entries) = glob(&pattern.to_string_lossy()) {
                    roots.extend(entries.flatten().filter(|p| p.is_dir()));
                }
            } else {
                let path = source_root.join(inc);
                if path.exists() {
                    roots.push(path);
                }
            }
        }
        if roots.is_empty() {
            roots.push(source_root.clone());
        }
        roots
    } else {
        paths.to_vec()
    };

    let files = collect_source_files(
        &source_root,
        &roots,
        &config.ignores,
        config.ignore_test_files,
        common.verbose,
    );
    let file_count = files.len();

    // Files are independent; analyze them in parallel, keeping scan order.
    let results: Vec<(String, Result<FileReport>)> = files
        .into_par_iter()
        .map(|file| {
            let report = analyze_file(&file);
            (file, report)
        })
        .collect();

    let mut reports = Vec::new();
    let mut parse_errors = Vec::new();
    for (file, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => parse_errors.push(ParseErrorIssue {
                file_path: file,
                error: format!("{:#}", err),
            }),
        }
    }

    Ok(ProjectAnalysis {
        reports,
        parse_errors,
        file_count,
    })
}

/// Build report issues for the unused properties of one file.
pub fn unused_issues(report: &FileReport) -> Vec<UnusedStyleIssue> {
    report
        .unused
        .iter()
        .map(|u| UnusedStyleIssue {
            context: SourceContext::new(
                SourceLocation::new(report.file_path.clone(), u.span.start, u.col),
                u.source_line.clone(),
            ),
            key: u.key.clone(),
            accessor: u.accessor.clone(),
            span: u.span,
        })
        .collect()
}

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    CommandResult {
        summary,
        issues,
        error_count,
        parse_error_count,
        source_files_checked,
    }
}
