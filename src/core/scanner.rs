use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Collect the source files to analyze under `roots`.
///
/// A root may be a single file (used as-is when scannable) or a directory
/// (walked recursively). Ignore patterns are matched the way the config
/// declares them: entries with wildcards are glob patterns against the full
/// path, plain entries are literal path prefixes relative to `base_dir`.
/// The result is deduplicated and sorted so reports and edits happen in a
/// deterministic order.
pub fn collect_source_files(
    base_dir: &Path,
    roots: &[PathBuf],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Vec<String> {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let ignored = |path: &Path| {
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        glob_patterns.iter().any(|p| p.matches(&path_str))
    };

    let mut files: BTreeSet<String> = BTreeSet::new();
    for root in roots {
        if root.is_file() {
            // Explicitly named files still have to look like source files
            // and respect the ignore list.
            if is_scannable_file(root) && !ignored(root) {
                files.insert(root.to_string_lossy().into());
            } else if verbose {
                eprintln!(
                    "{} Not a scannable source file: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if ignored(path) {
                continue;
            }
            if path.is_file() && is_scannable_file(path) {
                files.insert(path.to_string_lossy().into());
            }
        }
    }

    files.into_iter().collect()
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
