//! Error types for access control

use thiserror::Error;

/// Result type alias for access control
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for access control.
///
/// Authorization checks never produce errors; these cover configuration,
/// identifier parsing and route table construction.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Feature identifier not in the catalog
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Permission verb not in the catalog
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// Scope not in the catalog
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    /// Role identifier not in the role table
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Route pattern that does not compile
    #[error("Invalid route pattern '{pattern}': {source}")]
    InvalidRoutePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration that parsed but failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}
