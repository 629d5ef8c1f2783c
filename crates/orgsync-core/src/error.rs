//! Error types for orgsync-core

/// Result type for orgsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating a configuration bundle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A property was read from a restriction block that has no shape
    ///
    /// `target` is either `"undefined"` (key absent) or `"null"`.
    #[error("Cannot read properties of {target} (reading '{property}')")]
    MissingProperty {
        target: &'static str,
        property: &'static str,
    },

    /// A restriction or sub-organization entry is not a valid regular expression
    #[error("Invalid repository pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// More than one override file declares the same repository
    #[error(
        "Repository '{repository}' is defined in more than one override file: {}",
        files.join(", ")
    )]
    DuplicateOverride {
        repository: String,
        files: Vec<String>,
    },

    /// A settings document could not be parsed
    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// YAML deserialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a parse error for the named document
    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}
