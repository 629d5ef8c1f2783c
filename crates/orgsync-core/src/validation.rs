//! Bundle validation
//!
//! An opt-in lint over a [`ConfigBundle`]. The restriction gate and the
//! override resolver evaluate the bundle as written; this pass
//! is where a caller can reject malformed settings up front instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bundle::{ConfigBundle, RestrictedRepos, is_yaml_file};
use crate::pattern::compile_anchored;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    /// Informational notice
    Info,
    /// Potential problem
    Warning,
    /// Configuration error
    Error,
}

impl std::fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A problem found in a configuration bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity
    pub level: IssueLevel,
    /// Human-readable description
    pub message: String,
    /// File this relates to, if applicable
    pub file: Option<String>,
}

impl ValidationIssue {
    fn new(level: IssueLevel, message: impl Into<String>, file: Option<&str>) -> Self {
        Self {
            level,
            message: message.into(),
            file: file.map(str::to_string),
        }
    }
}

/// Lint the bundle for shape problems.
///
/// Checks for:
/// - Missing or null `restrictedRepos`
/// - Both `include` and `exclude` configured (include is ignored)
/// - Patterns that are not valid regular expressions
/// - Override files without a `.yml`/`.yaml` extension
/// - Repositories declared by more than one override file
/// - Override documents without a payload
pub fn validate(bundle: &ConfigBundle) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match &bundle.restricted_repos {
        RestrictedRepos::Absent => issues.push(ValidationIssue::new(
            IssueLevel::Error,
            "restrictedRepos is not defined; restriction checks will fail",
            None,
        )),
        RestrictedRepos::Null => issues.push(ValidationIssue::new(
            IssueLevel::Error,
            "restrictedRepos is null; restriction checks will fail",
            None,
        )),
        RestrictedRepos::List(items) if !items.is_empty() => issues.push(ValidationIssue::new(
            IssueLevel::Warning,
            "restrictedRepos is a list; use include/exclude to restrict repositories",
            None,
        )),
        RestrictedRepos::List(_) => {}
        RestrictedRepos::Spec(spec) => {
            let include = spec.include.as_deref().unwrap_or_default();
            let exclude = spec.exclude.as_deref().unwrap_or_default();
            if !include.is_empty() && !exclude.is_empty() {
                issues.push(ValidationIssue::new(
                    IssueLevel::Warning,
                    "restrictedRepos defines both include and exclude; include is ignored",
                    None,
                ));
            }
            check_patterns(exclude, "restrictedRepos.exclude", None, &mut issues);
            check_patterns(include, "restrictedRepos.include", None, &mut issues);
        }
    }

    let mut declared: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (file, document) in &bundle.repo_configs {
        if !is_yaml_file(file) {
            issues.push(ValidationIssue::new(
                IssueLevel::Warning,
                "Override file is not YAML and will be ignored",
                Some(file.as_str()),
            ));
            continue;
        }
        declared
            .entry(document.repository_name(file))
            .or_default()
            .push(file);
        if document.repository.config.is_null() {
            issues.push(ValidationIssue::new(
                IssueLevel::Info,
                "Override document has no config payload",
                Some(file.as_str()),
            ));
        }
    }
    for (name, files) in declared {
        if files.len() > 1 {
            issues.push(ValidationIssue::new(
                IssueLevel::Error,
                format!(
                    "Repository '{}' is defined in more than one override file: {}",
                    name,
                    files.join(", ")
                ),
                None,
            ));
        }
    }

    for (file, suborg) in &bundle.suborg_configs {
        if suborg.suborgrepos.is_empty() {
            issues.push(ValidationIssue::new(
                IssueLevel::Info,
                "Sub-organization selects no repositories",
                Some(file.as_str()),
            ));
        }
        check_patterns(&suborg.suborgrepos, "suborgrepos", Some(file.as_str()), &mut issues);
    }

    tracing::debug!(issues = issues.len(), "Validated configuration bundle");
    issues
}

/// Check whether any issue is severe enough to reject the bundle.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|issue| issue.level == IssueLevel::Error)
}

fn check_patterns(
    patterns: &[String],
    field: &str,
    file: Option<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    for pattern in patterns {
        if let Err(err) = compile_anchored(pattern) {
            issues.push(ValidationIssue::new(
                IssueLevel::Error,
                format!("{field}: {err}"),
                file,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> ConfigBundle {
        ConfigBundle::from_value(value).unwrap()
    }

    #[test]
    fn clean_bundle_has_no_issues() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": { "exclude": ["admin"] },
            "repoConfigs": {
                "api.yml": { "repository": { "name": "api", "config": { "private": true } } }
            }
        })));
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn missing_restriction_block_is_an_error() {
        let issues = validate(&bundle(json!({})));
        assert!(has_errors(&issues));
        assert!(issues[0].message.contains("not defined"));

        let issues = validate(&bundle(json!({ "restrictedRepos": null })));
        assert!(issues[0].message.contains("null"));
    }

    #[test]
    fn include_and_exclude_together_warns() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": { "include": ["a"], "exclude": ["b"] }
        })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert!(!has_errors(&issues));
    }

    #[test]
    fn invalid_patterns_are_errors() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": { "exclude": ["ok", "bad-("] },
            "subOrgConfigs": { "team.yml": { "suborgrepos": ["[z-a]"] } }
        })));
        let errors: Vec<_> = issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.starts_with("restrictedRepos.exclude"));
        assert_eq!(errors[1].file.as_deref(), Some("team.yml"));
    }

    #[test]
    fn duplicate_overrides_are_reported() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": [],
            "repoConfigs": {
                "api.yml": { "repository": { "config": 1 } },
                "api.yaml": { "repository": { "config": 2 } },
                "notes.txt": { "repository": { "name": "api", "config": 3 } }
            }
        })));
        assert!(issues.iter().any(|issue| issue.level == IssueLevel::Warning
            && issue.file.as_deref() == Some("notes.txt")));
        assert!(issues.iter().any(|issue| issue.level == IssueLevel::Error
            && issue.message.contains("'api'")
            && issue.message.contains("api.yaml, api.yml")));
    }

    #[test]
    fn restriction_list_warns() {
        let issues = validate(&bundle(json!({ "restrictedRepos": ["foo"] })));
        assert_eq!(
            issues,
            vec![ValidationIssue::new(
                IssueLevel::Warning,
                "restrictedRepos is a list; use include/exclude to restrict repositories",
                None,
            )]
        );

        assert!(validate(&bundle(json!({ "restrictedRepos": [] }))).is_empty());
    }

    #[test]
    fn override_without_payload_is_noted() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": [],
            "repoConfigs": { "api.yml": { "repository": { "name": "api" } } }
        })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Info);
        assert_eq!(issues[0].file.as_deref(), Some("api.yml"));
        assert!(issues[0].message.contains("no config payload"));
        assert!(!has_errors(&issues));
    }

    #[test]
    fn empty_suborg_is_noted() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": [],
            "subOrgConfigs": { "team.yml": { "suborgrepos": [] } }
        })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Info);
        assert_eq!(issues[0].file.as_deref(), Some("team.yml"));
        assert!(issues[0].message.contains("selects no repositories"));
    }

    #[test]
    fn unnamed_overrides_are_keyed_by_file_stem() {
        let issues = validate(&bundle(json!({
            "restrictedRepos": [],
            "repoConfigs": {
                "web.yml": { "repository": { "config": 1 } },
                "site.yaml": { "repository": { "name": "web", "config": 2 } }
            }
        })));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Error);
        assert!(issues[0].message.contains("'web'"));
        assert!(issues[0].message.contains("site.yaml, web.yml"));
    }

    #[test]
    fn issue_level_display() {
        assert_eq!(IssueLevel::Info.to_string(), "info");
        assert_eq!(IssueLevel::Warning.to_string(), "warning");
        assert_eq!(IssueLevel::Error.to_string(), "error");
    }
}
