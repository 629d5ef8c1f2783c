//! Restriction check command

use std::path::Path;

use colored::Colorize;
use orgsync_core::{SessionContext, Settings};
use serde_json::json;

use crate::error::Result;
use crate::loader::load_bundle;

/// Run the check command
pub fn run_check(config_dir: &Path, repos: &[String], json: bool) -> Result<()> {
    let bundle = load_bundle(config_dir)?;
    let settings = Settings::new(&bundle, SessionContext::default());

    let mut verdicts = Vec::with_capacity(repos.len());
    for repo in repos {
        verdicts.push((repo.as_str(), settings.is_restricted(repo)?));
    }

    if json {
        let output: Vec<_> = verdicts
            .iter()
            .map(|(repo, restricted)| json!({ "repository": repo, "restricted": restricted }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (repo, restricted) in verdicts {
        let verdict = if restricted {
            "restricted".red()
        } else {
            "eligible".green()
        };
        println!("{:<30} {}", repo, verdict);
    }
    Ok(())
}
