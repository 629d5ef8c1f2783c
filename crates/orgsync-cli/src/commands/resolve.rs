//! Resolve command

use std::path::Path;

use orgsync_core::{SessionContext, Settings};
use serde_json::Value;

use crate::error::Result;
use crate::loader::load_bundle;

/// Run the resolve command
///
/// Prints the resolution as JSON. With `override_only`, prints just the
/// repository override payload (`null` when there is none) without
/// consulting restrictions.
pub fn run_resolve(config_dir: &Path, repo: &str, override_only: bool) -> Result<()> {
    let bundle = load_bundle(config_dir)?;
    let settings = Settings::new(&bundle, SessionContext::default());

    let output = if override_only {
        settings.get_repo_configs(repo)?.cloned().unwrap_or(Value::Null)
    } else {
        serde_json::to_value(settings.resolve(repo)?)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
