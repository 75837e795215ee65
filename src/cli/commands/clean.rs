use std::fs;

use anyhow::{Context, Result};

use super::helper::{analyze_project, finish, unused_issues};
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::cli::args::CleanCommand;
use crate::core::delete_line_spans;
use crate::issues::Issue;

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let analysis = analyze_project(&cmd.paths, &args.common)?;
    let apply = args.apply;

    let mut unused_count = 0;
    let mut line_count = 0;
    let mut file_count = 0;
    let mut issues: Vec<Issue> = Vec::new();

    for report in &analysis.reports {
        if report.unused.is_empty() {
            continue;
        }
        file_count += 1;
        unused_count += report.unused.len();

        if apply {
            // Edit the snapshot the spans were computed against, then write
            // the whole file back in one pass.
            let (edited, deleted) = delete_line_spans(&report.source, &report.spans());
            fs::write(&report.file_path, edited)
                .with_context(|| format!("Failed to write file: {}", report.file_path))?;
            line_count += deleted;
        } else {
            line_count += report.planned_line_count();
            issues.extend(unused_issues(report).into_iter().map(Issue::UnusedStyle));
        }
    }

    issues.extend(
        analysis
            .parse_errors
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            unused_count,
            line_count,
            file_count,
            is_apply: apply,
        }),
        issues,
        analysis.file_count,
    ))
}
