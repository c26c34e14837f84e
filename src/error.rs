//! Error types for page generation.

use std::path::PathBuf;

/// Result type for page generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading the distribution matrix.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The matrix file is missing or unreadable.
    #[error("unable to read distribution matrix '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matrix is not valid YAML or lacks required keys.
    #[error("unable to parse distribution matrix: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The matrix parsed but violates a constraint.
    #[error("invalid distribution matrix: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create a new invalid matrix error.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Errors that can occur when generating repository pages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Distribution matrix could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The repository root does not exist.
    #[error("APT repository directory {} not found", .0.display())]
    MissingRepository(PathBuf),

    /// I/O error on a specific path.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Template loading or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
