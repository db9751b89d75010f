//! Error types for loading input and driving the terminal
//!
//! Inspection itself never fails; every error here comes from I/O, JSON decoding or
//! command-line configuration.

use thiserror::Error;

/// Errors surfaced by the `objscope` binary and its loaders
#[derive(Debug, Error)]
pub enum ObjscopeError {
    /// Reading the input or talking to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not valid JSON
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// A theme name other than `light` or `dark`
    #[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
    InvalidTheme(String),
}

pub type Result<T> = std::result::Result<T, ObjscopeError>;
