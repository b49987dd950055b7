//! Error types for problem-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ProblemError.
pub type Result<T> = std::result::Result<T, ProblemError>;

/// Errors from reading uploads and writing problem files.
///
/// Parsing never fails; these only surface on the ingest and write paths.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("{filename}: Not a markdown file")]
    NotMarkdown { filename: String },

    #[error("{filename}: file is not valid UTF-8")]
    InvalidUtf8 { filename: String },

    #[error("problem file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to serialize front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
