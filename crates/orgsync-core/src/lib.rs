//! Configuration resolution and restriction engine for orgsync
//!
//! This crate decides, for one organization's settings, which repositories
//! may be managed and what configuration applies to each of them:
//!
//! - **Restriction gate**: `restrictedRepos.include` / `restrictedRepos.exclude`
//!   patterns decide whether a repository is eligible
//! - **Override resolver**: finds the per-repository override document by the
//!   repository name it declares, independent of the `.yml`/`.yaml` filename
//! - **Layered resolution**: baseline, sub-organization and repository layers
//!   deep-merged into one effective configuration
//! - **Validation**: an opt-in lint for malformed bundles
//!
//! Nothing here performs I/O. Callers parse settings documents into a
//! [`ConfigBundle`] and keep it immutable for the session.
//!
//! # Example
//!
//! ```
//! use orgsync_core::{ConfigBundle, Resolution, SessionContext, Settings};
//! use serde_json::json;
//!
//! let bundle = ConfigBundle::from_value(json!({
//!     "restrictedRepos": { "exclude": ["admin", ".*-archive$"] },
//!     "repository": { "has_wiki": false },
//!     "repoConfigs": {
//!         "api.yml": { "repository": { "name": "api", "config": { "private": true } } }
//!     }
//! }))
//! .unwrap();
//!
//! let settings = Settings::new(&bundle, SessionContext::default());
//! assert!(settings.is_restricted("old-archive").unwrap());
//! assert_eq!(settings.get_repo_configs("api").unwrap(), Some(&json!({ "private": true })));
//!
//! match settings.resolve("api").unwrap() {
//!     Resolution::Resolved(resolved) => {
//!         assert_eq!(resolved.config["repository"]["has_wiki"], false);
//!         assert_eq!(resolved.config["private"], true);
//!     }
//!     Resolution::Restricted => unreachable!(),
//! }
//! ```

pub mod bundle;
pub mod error;
pub mod merge;
pub mod overrides;
pub mod pattern;
pub mod restriction;
pub mod settings;
pub mod suborg;
pub mod validation;

pub use bundle::{
    ConfigBundle, OverrideDocument, RepositoryRecord, RestrictedRepos, RestrictionSpec,
    SubOrgDocument,
};
pub use error::{Error, Result};
pub use merge::deep_merge_value;
pub use overrides::OverrideResolver;
pub use restriction::RestrictionGate;
pub use settings::{ConfigSource, Resolution, ResolvedConfig, SessionContext, Settings};
pub use validation::{IssueLevel, ValidationIssue, has_errors, validate};
