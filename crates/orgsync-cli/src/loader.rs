//! Settings directory loader
//!
//! Reads a settings directory into a [`ConfigBundle`]:
//!
//! ```text
//! <dir>/settings.yml        organization settings (or settings.yaml)
//! <dir>/repos/*.yml         repository overrides
//! <dir>/suborgs/*.yml       sub-organization settings
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use orgsync_core::ConfigBundle;
use orgsync_core::bundle::is_yaml_file;

use crate::error::{CliError, Result};

/// Directory holding repository override files
pub const REPOS_DIR: &str = "repos";

/// Directory holding sub-organization files
pub const SUBORGS_DIR: &str = "suborgs";

const SETTINGS_FILES: [&str; 2] = ["settings.yml", "settings.yaml"];

/// Load every settings document under `dir`.
pub fn load_bundle(dir: &Path) -> Result<ConfigBundle> {
    let settings_path = SETTINGS_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            CliError::user(format!("No settings.yml found in {}", dir.display()))
        })?;

    tracing::debug!(path = %settings_path.display(), "Loading organization settings");
    let mut bundle = ConfigBundle::from_yaml(&read(&settings_path)?)?;

    for (file, path) in yaml_files(&dir.join(REPOS_DIR))? {
        bundle = bundle.with_repo_config(file, &read(&path)?)?;
    }
    for (file, path) in yaml_files(&dir.join(SUBORGS_DIR))? {
        bundle = bundle.with_suborg_config(file, &read(&path)?)?;
    }

    tracing::info!(
        overrides = bundle.repo_configs.len(),
        suborgs = bundle.suborg_configs.len(),
        "Loaded settings directory"
    );
    Ok(bundle)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// List YAML files in `dir`, sorted by filename. A missing directory is empty.
fn yaml_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Directory not present - skipping");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CliError::io(dir, e))? {
        let entry = entry.map_err(|e| CliError::io(dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        if path.is_file() && is_yaml_file(&name) {
            files.push((name, path));
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgsync_core::RestrictedRepos;
    use tempfile::TempDir;

    #[test]
    fn missing_settings_file_is_a_user_error() {
        let temp = TempDir::new().unwrap();
        let err = load_bundle(temp.path()).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn loads_settings_and_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("settings.yaml"), "restrictedRepos: []\n").unwrap();
        fs::create_dir_all(temp.path().join(REPOS_DIR)).unwrap();
        fs::write(
            temp.path().join(REPOS_DIR).join("api.yml"),
            "repository:\n  config:\n    private: true\n",
        )
        .unwrap();
        fs::write(temp.path().join(REPOS_DIR).join("README.md"), "# notes\n").unwrap();

        let bundle = load_bundle(temp.path()).unwrap();
        assert_eq!(bundle.restricted_repos, RestrictedRepos::List(vec![]));
        assert_eq!(bundle.repo_configs.len(), 1);
        assert!(bundle.repo_configs.contains_key("api.yml"));
        assert!(bundle.suborg_configs.is_empty());
    }
}
