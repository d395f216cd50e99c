//! Error types for repoherd.

use thiserror::Error;

/// The main error type for repository fetching and publishing operations.
#[derive(Error, Debug)]
pub enum HerdError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {message}")]
    Api { message: String },

    #[error("Invalid account name: {0}")]
    InvalidAccount(String),

    #[error("Git authentication failed: {message}")]
    GitAuth { message: String },

    #[error("Clone failed for {repo}: {message}")]
    CloneError { repo: String, message: String },

    #[error("Push failed: {message}")]
    PushError { message: String },

    #[error("Repository creation failed: {message}")]
    CreateError { message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for repoherd operations.
pub type Result<T> = std::result::Result<T, HerdError>;
