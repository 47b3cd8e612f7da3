//! Error types for Quiver.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Quiver operations.
pub type Result<T> = std::result::Result<T, QuiverError>;

/// Errors that can occur in Quiver.
#[derive(Debug, Error)]
pub enum QuiverError {
    /// Failed to open a scene file.
    #[error("Failed to open scene file: {path}")]
    FileOpen {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Malformed point or vector input.
    #[error("{0}")]
    Parse(String),

    /// Point/vector arity does not match the active plot mode.
    #[error("{0}")]
    Dimension(String),

    /// Malformed equation expression.
    #[error("Invalid expression: {0}")]
    Expr(String),

    /// Invalid plot range.
    #[error("{0}")]
    Range(String),

    /// Failed to render the PNG snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuiverError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a Dimension error.
    pub fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension(message.into())
    }

    /// Create an Expr error.
    pub fn expr(message: impl Into<String>) -> Self {
        Self::Expr(message.into())
    }
}
