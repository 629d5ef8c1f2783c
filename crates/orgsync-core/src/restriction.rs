//! Restriction gate
//!
//! Decides whether a repository may be managed at all. The decision depends
//! only on the bundle's `restrictedRepos` block and the repository name:
//!
//! 1. A non-empty `exclude` list is a deny-list and ends the decision.
//! 2. Otherwise a non-empty `include` list is an allow-list.
//! 3. Otherwise every repository is eligible.
//!
//! Reading `exclude` tolerates a missing or null block; reading `include`
//! does not, and the resulting [`Error::MissingProperty`] reaches the caller.
//!
//! [`Error::MissingProperty`]: crate::Error::MissingProperty

use crate::Result;
use crate::bundle::RestrictedRepos;
use crate::pattern::matches_any;

/// Restriction gate over one bundle's `restrictedRepos` block
#[derive(Debug, Clone, Copy)]
pub struct RestrictionGate<'a> {
    restricted: &'a RestrictedRepos,
}

impl<'a> RestrictionGate<'a> {
    pub fn new(restricted: &'a RestrictedRepos) -> Self {
        Self { restricted }
    }

    /// Returns `true` when `repo_name` must NOT be configured.
    ///
    /// # Errors
    ///
    /// [`Error::MissingProperty`](crate::Error::MissingProperty) when the
    /// block is absent or null and no exclude list decided first, and
    /// [`Error::InvalidPattern`](crate::Error::InvalidPattern) when a pattern
    /// that has to be evaluated is not a valid regular expression.
    pub fn is_restricted(&self, repo_name: &str) -> Result<bool> {
        if let Some(exclude) = self.restricted.exclude_list().filter(|list| !list.is_empty()) {
            let excluded = matches_any(exclude, repo_name)?;
            tracing::debug!(repo_name, excluded, "Checked exclude list");
            return Ok(excluded);
        }

        if let Some(include) = self.restricted.include_list()?.filter(|list| !list.is_empty()) {
            let included = matches_any(include, repo_name)?;
            tracing::debug!(repo_name, included, "Checked include list");
            return Ok(!included);
        }

        Ok(false)
    }
}
