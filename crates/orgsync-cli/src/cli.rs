//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// orgsync - Resolve organization settings for repositories
#[derive(Parser, Debug)]
#[command(name = "orgsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings directory containing settings.yml, repos/ and suborgs/
    #[arg(
        short,
        long,
        global = true,
        env = "ORGSYNC_CONFIG_DIR",
        default_value = ".github"
    )]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report whether repositories may be managed
    ///
    /// Examples:
    ///   orgsync check api web        # One line per repository
    ///   orgsync check api --json     # Machine-readable verdicts
    Check {
        /// Repository names to check
        #[arg(required = true)]
        repos: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration of a repository as JSON
    Resolve {
        /// Repository name
        repo: String,

        /// Print only the repository override payload
        #[arg(long)]
        override_only: bool,
    },

    /// Validate the settings directory
    Lint {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
