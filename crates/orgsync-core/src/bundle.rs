//! Configuration bundle model and loading
//!
//! A [`ConfigBundle`] is the parsed form of one organization's settings:
//! the organization document itself (restriction block plus baseline keys),
//! the per-repository override documents keyed by filename, and the
//! sub-organization documents keyed by filename.
//!
//! The bundle is built once per session and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use orgsync_core::ConfigBundle;
//!
//! let bundle = ConfigBundle::from_yaml(
//!     r#"
//! restrictedRepos:
//!   exclude: ["admin"]
//! repository:
//!   has_issues: true
//! "#,
//! )
//! .unwrap()
//! .with_repo_config(
//!     "api.yml",
//!     "repository:\n  name: api\n  config:\n    private: true\n",
//! )
//! .unwrap();
//!
//! assert_eq!(bundle.repo_configs.len(), 1);
//! assert_eq!(bundle.baseline["repository"]["has_issues"], true);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Shape of the `restrictedRepos` key of the organization document.
///
/// Each case reads `include`/`exclude` differently; see
/// [`RestrictedRepos::exclude_list`] and [`RestrictedRepos::include_list`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RestrictedRepos {
    /// The key is not present in the document
    #[default]
    Absent,
    /// The key is present with an explicit `null`
    Null,
    /// The key holds a sequence; neither list can be read from it
    List(Vec<Value>),
    /// The key holds a mapping with optional `include` and `exclude` lists
    Spec(RestrictionSpec),
}

/// The `{ include, exclude }` form of `restrictedRepos`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestrictionSpec {
    /// Allow-list of repository patterns
    #[serde(default, deserialize_with = "optional_patterns")]
    pub include: Option<Vec<String>>,

    /// Deny-list of repository patterns
    #[serde(default, deserialize_with = "optional_patterns")]
    pub exclude: Option<Vec<String>>,
}

/// Read a pattern list, taking numeric and boolean entries by their text.
///
/// YAML reads an unquoted `2048` or `true` as a scalar rather than a
/// string; such entries still name repositories.
fn patterns<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(D::Error::custom(format!(
                "repository pattern must be a string, found {other}"
            ))),
        })
        .collect()
}

fn optional_patterns<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<String>>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => patterns(value).map(Some).map_err(D::Error::custom),
    }
}

impl RestrictedRepos {
    /// Read `exclude`, tolerating a missing or null restriction block.
    pub fn exclude_list(&self) -> Option<&[String]> {
        match self {
            Self::Spec(spec) => spec.exclude.as_deref(),
            Self::Absent | Self::Null | Self::List(_) => None,
        }
    }

    /// Read `include` without tolerating a missing or null restriction block.
    ///
    /// A sequence or a mapping without `include` simply has no include list,
    /// but there is nothing to read from an absent or null block and the
    /// read fails.
    pub fn include_list(&self) -> Result<Option<&[String]>> {
        match self {
            Self::Absent => Err(Error::MissingProperty {
                target: "undefined",
                property: "include",
            }),
            Self::Null => Err(Error::MissingProperty {
                target: "null",
                property: "include",
            }),
            Self::List(_) => Ok(None),
            Self::Spec(spec) => Ok(spec.include.as_deref()),
        }
    }
}

impl<'de> Deserialize<'de> for RestrictedRepos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Null),
            Value::Array(items) => Ok(Self::List(items)),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::Spec)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "restrictedRepos must be a list or a mapping, found {other}"
            ))),
        }
    }
}

/// The `repository` record of an override document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository this document applies to; defaults to the file stem
    #[serde(default)]
    pub name: Option<String>,

    /// Override payload handed back by the resolver
    #[serde(default)]
    pub config: Value,

    /// Remaining fields, kept but not interpreted
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A per-repository override document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverrideDocument {
    #[serde(default)]
    pub repository: RepositoryRecord,
}

impl OverrideDocument {
    /// The repository name this document declares.
    ///
    /// Uses `repository.name` when present, otherwise the stem of `file`,
    /// otherwise `file` itself.
    pub fn repository_name<'a>(&'a self, file: &'a str) -> &'a str {
        self.repository
            .name
            .as_deref()
            .or_else(|| Path::new(file).file_stem().and_then(|stem| stem.to_str()))
            .unwrap_or(file)
    }
}

/// A sub-organization document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubOrgDocument {
    /// Patterns selecting the repositories in this sub-organization
    #[serde(default, deserialize_with = "patterns")]
    pub suborgrepos: Vec<String>,

    /// Settings layered over the organization baseline
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// Check whether a candidate filename carries a YAML document.
pub fn is_yaml_file(file: &str) -> bool {
    file.ends_with(".yml") || file.ends_with(".yaml")
}

/// The full parsed settings for one organization
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigBundle {
    /// Which repositories may be managed at all
    #[serde(default)]
    pub restricted_repos: RestrictedRepos,

    /// Per-repository override documents keyed by filename
    #[serde(default)]
    pub repo_configs: BTreeMap<String, OverrideDocument>,

    /// Sub-organization documents keyed by filename
    #[serde(default, rename = "subOrgConfigs")]
    pub suborg_configs: BTreeMap<String, SubOrgDocument>,

    /// Every other key of the organization document
    #[serde(flatten)]
    pub baseline: Map<String, Value>,
}

impl ConfigBundle {
    /// Parse the organization settings document.
    ///
    /// An empty document yields an empty bundle, with `restrictedRepos`
    /// absent.
    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_yaml("organization settings", content)
    }

    /// Build a bundle from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Add a repository override document parsed from YAML.
    pub fn with_repo_config(mut self, file: impl Into<String>, content: &str) -> Result<Self> {
        let file = file.into();
        let document: OverrideDocument = parse_yaml(&file, content)?;
        tracing::debug!(
            file = %file,
            name = ?document.repository.name,
            "Loaded repository override"
        );
        self.repo_configs.insert(file, document);
        Ok(self)
    }

    /// Add a sub-organization document parsed from YAML.
    pub fn with_suborg_config(mut self, file: impl Into<String>, content: &str) -> Result<Self> {
        let file = file.into();
        let document: SubOrgDocument = parse_yaml(&file, content)?;
        tracing::debug!(
            file = %file,
            patterns = document.suborgrepos.len(),
            "Loaded sub-organization"
        );
        self.suborg_configs.insert(file, document);
        Ok(self)
    }
}

/// Parse a YAML document, treating blank content as the default value.
fn parse_yaml<T: DeserializeOwned + Default>(source_name: &str, content: &str) -> Result<T> {
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::parse(source_name, e))
}
