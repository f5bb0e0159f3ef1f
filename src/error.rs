//! Error types for the terminal core and its ambient layers.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a single command invocation can produce.
///
/// These never abort a session: the interpreter renders them inline as the
/// command's result and the prompt continues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "name")]
pub enum CommandError {
    #[error("zsh: command not found: {0}")]
    CommandNotFound(String),

    #[error("cd: no such file or directory: {0}")]
    PathNotFound(String),

    #[error("cat: no such file or directory: {0}")]
    FileNotFound(String),

    #[error("zsh: unsupported syntax: {0}")]
    UnsupportedSyntax(String),
}

/// Errors raised while validating a tree definition.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Empty title under {parent}")]
    EmptyTitle { parent: String },

    #[error("Invalid title {title:?} under {parent}: {reason}")]
    InvalidTitle {
        title: String,
        parent: String,
        reason: &'static str,
    },

    #[error("Duplicate title {title:?} under {parent}")]
    DuplicateTitle { title: String, parent: String },

    #[error("Failed to read tree definition {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported tree definition format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse tree definition: {0}")]
    Parse(String),
}

/// Errors surfaced at startup: configuration, tree loading, logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
