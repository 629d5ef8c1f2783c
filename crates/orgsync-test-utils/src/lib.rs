//! Shared test utilities for the orgsync workspace.
//!
//! Provides [`SettingsDir`], a temporary settings directory laid out the way
//! the CLI loader expects. It is a dev-dependency only, never published.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary settings directory with builder helpers.
///
/// # Example
///
/// ```rust,no_run
/// use orgsync_test_utils::SettingsDir;
///
/// let dir = SettingsDir::new()
///     .with_settings("restrictedRepos:\n  exclude: [admin]\n")
///     .with_repo("api.yml", "repository:\n  name: api\n  config: {}\n");
/// dir.assert_file_exists("repos/api.yml");
/// ```
pub struct SettingsDir {
    temp_dir: TempDir,
}

impl Default for SettingsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `settings.yml`.
    pub fn with_settings(self, content: &str) -> Self {
        self.write("settings.yml", content);
        self
    }

    /// Write a repository override file under `repos/`.
    pub fn with_repo(self, file: &str, content: &str) -> Self {
        self.write(&format!("repos/{file}"), content);
        self
    }

    /// Write a sub-organization file under `suborgs/`.
    pub fn with_suborg(self, file: &str, content: &str) -> Self {
        self.write(&format!("suborgs/{file}"), content);
        self
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
