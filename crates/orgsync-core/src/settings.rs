//! Settings engine
//!
//! [`Settings`] is constructed once per configuration bundle and answers, for
//! any repository name:
//!
//! - whether the repository may be managed ([`Settings::is_restricted`]),
//! - which override payload applies to it ([`Settings::get_repo_configs`]),
//! - the effective configuration after layering baseline, sub-organization
//!   and repository settings ([`Settings::resolve`]).
//!
//! The engine only borrows the bundle and holds no mutable state, so one
//! instance can serve many names, including from several threads.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::bundle::ConfigBundle;
use crate::merge::deep_merge_value;
use crate::overrides::OverrideResolver;
use crate::restriction::RestrictionGate;
use crate::suborg::matching_suborgs;

/// Caller context for one resolution session.
///
/// Carried for diagnostics only; none of these values affect a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Installation the bundle was loaded for
    pub installation_id: Option<u64>,
    /// Git ref the bundle was read from
    pub git_ref: Option<String>,
    /// Sub-organization that triggered the session, if any
    pub suborg: Option<String>,
}

/// A layer that contributed to a resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layer", rename_all = "lowercase")]
pub enum ConfigSource {
    /// Organization-wide settings
    Baseline,
    /// A sub-organization document
    SubOrg { file: String },
    /// The repository override document
    Repository { file: String },
}

/// Effective configuration for one repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Repository name
    pub repository: String,
    /// Merged settings
    pub config: Value,
    /// Layers applied, in merge order
    pub sources: Vec<ConfigSource>,
}

/// Outcome of [`Settings::resolve`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    /// The repository must not be configured
    Restricted,
    /// The repository is eligible and this is its configuration
    Resolved(ResolvedConfig),
}

/// Restriction and override engine for one configuration bundle
#[derive(Debug, Clone)]
pub struct Settings<'a> {
    bundle: &'a ConfigBundle,
    context: SessionContext,
}

impl<'a> Settings<'a> {
    /// Create an engine over `bundle`.
    pub fn new(bundle: &'a ConfigBundle, context: SessionContext) -> Self {
        Self { bundle, context }
    }

    /// The bundle this engine evaluates
    pub fn bundle(&self) -> &'a ConfigBundle {
        self.bundle
    }

    /// The session context passed at construction
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Returns `true` when `repo_name` must NOT be configured.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingProperty`](crate::Error::MissingProperty)
    /// when `restrictedRepos` is absent or null and no exclude list decided
    /// first. The error is not recovered here.
    pub fn is_restricted(&self, repo_name: &str) -> Result<bool> {
        let restricted =
            RestrictionGate::new(&self.bundle.restricted_repos).is_restricted(repo_name)?;
        if restricted {
            tracing::debug!(
                repo_name,
                installation_id = ?self.context.installation_id,
                "Repository is restricted"
            );
        }
        Ok(restricted)
    }

    /// Return the override payload declared for `repo_name`, if any.
    ///
    /// No override is not an error: the caller falls back to the baseline.
    pub fn get_repo_configs(&self, repo_name: &str) -> Result<Option<&'a Value>> {
        OverrideResolver::new(&self.bundle.repo_configs).get_repo_configs(repo_name)
    }

    /// Compute the effective configuration for `repo_name`.
    ///
    /// Restricted repositories short-circuit before any override lookup.
    /// Otherwise the baseline is deep-merged with every matching
    /// sub-organization (in filename order) and finally with the repository
    /// override payload.
    pub fn resolve(&self, repo_name: &str) -> Result<Resolution> {
        if self.is_restricted(repo_name)? {
            return Ok(Resolution::Restricted);
        }

        let mut config = Value::Object(self.bundle.baseline.clone());
        let mut sources = vec![ConfigSource::Baseline];

        for (file, suborg) in matching_suborgs(&self.bundle.suborg_configs, repo_name)? {
            deep_merge_value(&mut config, &Value::Object(suborg.settings.clone()));
            sources.push(ConfigSource::SubOrg {
                file: file.to_string(),
            });
        }

        if let Some((file, document)) =
            OverrideResolver::new(&self.bundle.repo_configs).find(repo_name)?
        {
            if !document.repository.config.is_null() {
                deep_merge_value(&mut config, &document.repository.config);
                sources.push(ConfigSource::Repository {
                    file: file.to_string(),
                });
            }
        }

        tracing::info!(
            repo_name,
            installation_id = ?self.context.installation_id,
            layers = sources.len(),
            "Resolved repository configuration"
        );

        Ok(Resolution::Resolved(ResolvedConfig {
            repository: repo_name.to_string(),
            config,
            sources,
        }))
    }
}
