//! Repository override lookup
//!
//! Override documents are keyed by filename, but the key plays no part in the
//! lookup beyond marking the document as YAML: a repository is found through
//! the name its document declares, whether it lives in `name.yml`,
//! `name.yaml` or any other YAML file.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::bundle::{OverrideDocument, is_yaml_file};
use crate::{Error, Result};

/// Resolver over one bundle's `repoConfigs` mapping
#[derive(Debug, Clone, Copy)]
pub struct OverrideResolver<'a> {
    repo_configs: &'a BTreeMap<String, OverrideDocument>,
}

impl<'a> OverrideResolver<'a> {
    pub fn new(repo_configs: &'a BTreeMap<String, OverrideDocument>) -> Self {
        Self { repo_configs }
    }

    /// Find the override document for `repo_name` along with its filename.
    ///
    /// Returns `Ok(None)` when no document declares the repository.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateOverride`] when several documents declare the same
    /// repository; the files are listed in sorted order.
    pub fn find(&self, repo_name: &str) -> Result<Option<(&'a str, &'a OverrideDocument)>> {
        let mut matches = self
            .repo_configs
            .iter()
            .filter(|(file, _)| is_yaml_file(file))
            .filter(|(file, doc)| doc.repository_name(file) == repo_name);

        let Some((file, document)) = matches.next() else {
            tracing::debug!(repo_name, "No repository override found");
            return Ok(None);
        };

        let duplicates: Vec<&String> = matches.map(|(file, _)| file).collect();
        if !duplicates.is_empty() {
            let mut files = vec![file.clone()];
            files.extend(duplicates.into_iter().cloned());
            return Err(Error::DuplicateOverride {
                repository: repo_name.to_string(),
                files,
            });
        }

        tracing::debug!(repo_name, file = %file, "Found repository override");
        Ok(Some((file.as_str(), document)))
    }

    /// Return the `config` payload of the override for `repo_name`.
    ///
    /// A matching document without a `config` key yields `Value::Null`.
    pub fn get_repo_configs(&self, repo_name: &str) -> Result<Option<&'a Value>> {
        Ok(self
            .find(repo_name)?
            .map(|(_, document)| &document.repository.config))
    }
}
