//! Lint command

use std::path::Path;

use colored::Colorize;
use orgsync_core::{IssueLevel, has_errors, validate};

use crate::error::{CliError, Result};
use crate::loader::load_bundle;

/// Run the lint command
///
/// Fails when any issue is an error.
pub fn run_lint(config_dir: &Path, json: bool) -> Result<()> {
    let bundle = load_bundle(config_dir)?;
    let issues = validate(&bundle);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!("{} No issues found in {}", "ok".green().bold(), config_dir.display());
    } else {
        for issue in &issues {
            let level = match issue.level {
                IssueLevel::Info => issue.level.to_string().blue(),
                IssueLevel::Warning => issue.level.to_string().yellow(),
                IssueLevel::Error => issue.level.to_string().red(),
            };
            match &issue.file {
                Some(file) => println!("{}: {} ({})", level.bold(), issue.message, file.dimmed()),
                None => println!("{}: {}", level.bold(), issue.message),
            }
        }
    }

    if has_errors(&issues) {
        let count = issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
            .count();
        return Err(CliError::user(format!("{count} configuration error(s) found")));
    }
    Ok(())
}
