//! Repository name patterns
//!
//! Every entry in `restrictedRepos.include`, `restrictedRepos.exclude` and a
//! sub-organization's `suborgrepos` list is either an exact repository name
//! or a regular expression that must match the *whole* name.
//!
//! ```
//! use orgsync_core::pattern::matches_pattern;
//!
//! assert!(matches_pattern(".*-test$", "my-repo-test").unwrap());
//! assert!(!matches_pattern(".*-test$", "my-repo-test-data").unwrap());
//! assert!(!matches_pattern("foo", "foobar").unwrap());
//! ```

use regex::Regex;

use crate::{Error, Result};

/// Compile `pattern` so that it only matches complete repository names.
///
/// Existing `^`/`$` anchors in the pattern are harmless: they are zero-width
/// and the outer anchors pin the same positions.
pub fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Check a single pattern against a repository name.
///
/// Exact equality wins before the pattern is compiled, so a literal name that
/// happens to be an invalid regex still matches itself.
pub fn matches_pattern(pattern: &str, repo_name: &str) -> Result<bool> {
    if pattern == repo_name {
        return Ok(true);
    }
    Ok(compile_anchored(pattern)?.is_match(repo_name))
}

/// Check whether any pattern in `patterns` matches `repo_name`.
///
/// Patterns are tried in order and evaluation stops at the first match.
pub fn matches_any<S: AsRef<str>>(patterns: &[S], repo_name: &str) -> Result<bool> {
    for pattern in patterns {
        if matches_pattern(pattern.as_ref(), repo_name)? {
            tracing::trace!(pattern = pattern.as_ref(), repo_name, "Pattern matched");
            return Ok(true);
        }
    }
    Ok(false)
}
