use anyhow::Result;

use super::helper::{analyze_project, finish, unused_issues};
use super::{CommandResult, CommandSummary};
use crate::cli::args::CheckCommand;
use crate::issues::Issue;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let analysis = analyze_project(&cmd.paths, &cmd.args.common)?;

    let mut issues: Vec<Issue> = Vec::new();
    for report in &analysis.reports {
        issues.extend(unused_issues(report).into_iter().map(Issue::UnusedStyle));
    }
    issues.extend(
        analysis
            .parse_errors
            .iter()
            .cloned()
            .map(Issue::ParseError),
    );

    Ok(finish(CommandSummary::Check, issues, analysis.file_count))
}
