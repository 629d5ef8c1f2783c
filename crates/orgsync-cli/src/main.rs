//! orgsync CLI
//!
//! Reads a settings directory and answers restriction and resolution queries
//! for repositories.

mod cli;
mod commands;
mod error;
mod loader;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(config = %cli.config.display(), "Using settings directory");
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check { repos, json } => commands::run_check(&cli.config, repos, *json),
        Commands::Resolve {
            repo,
            override_only,
        } => commands::run_resolve(&cli.config, repo, *override_only),
        Commands::Lint { json } => commands::run_lint(&cli.config, *json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgsync_test_utils::SettingsDir;

    #[test]
    fn check_against_settings_dir() {
        let dir = SettingsDir::new().with_settings("restrictedRepos:\n  exclude: [admin]\n");
        let result = commands::run_check(dir.path(), &["api".to_string()], false);
        assert!(result.is_ok());
    }

    #[test]
    fn check_propagates_missing_restrictions() {
        let dir = SettingsDir::new().with_settings("repository:\n  private: true\n");
        let err = commands::run_check(dir.path(), &["api".to_string()], true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot read properties of undefined (reading 'include')"
        );
    }

    #[test]
    fn lint_fails_on_errors() {
        let dir = SettingsDir::new().with_settings("restrictedRepos: ~\n");
        assert!(commands::run_lint(dir.path(), false).is_err());
    }

    #[test]
    fn resolve_missing_settings_is_user_error() {
        let dir = SettingsDir::new();
        let err = commands::run_resolve(dir.path(), "api", false).unwrap_err();
        assert!(err.to_string().contains("No settings.yml"));
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
