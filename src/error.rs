//! Error types
//!
//! `ShellError` covers everything a visitor can get wrong at the prompt. The
//! interpreter never lets these escape: each one becomes a diagnostic output
//! record. `TreeError` and `ConfigError` only happen while the host is
//! starting up.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// User-input errors raised by verb handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{verb}: no such directory: {path}")]
    NoSuchDirectory { verb: String, path: String },

    #[error("{verb}: no such file: {path}")]
    NoSuchFile { verb: String, path: String },

    #[error("{0}: missing file argument")]
    MissingFileArgument(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),
}

impl ShellError {
    /// Category shown to the rendering layer
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::NoSuchDirectory { .. } => DiagnosticKind::Navigation,
            Self::NoSuchFile { .. } => DiagnosticKind::Lookup,
            Self::MissingFileArgument(_) => DiagnosticKind::Argument,
            Self::CommandNotFound(_) => DiagnosticKind::UnknownCommand,
        }
    }
}

/// Diagnostic categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Navigation,
    Lookup,
    Argument,
    UnknownCommand,
}

/// A malformed content tree. Only raised when the tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root node must be a directory, found file '{0}'")]
    RootNotDirectory(String),

    #[error("duplicate entry '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },

    #[error("invalid entry name '{name}' under '{parent}'")]
    InvalidName { parent: String, name: String },
}

/// Failures while loading configuration or content from disk
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
