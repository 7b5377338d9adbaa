//! Error types for fontpeek

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontPeekError>;

/// Main error type for fontpeek
#[derive(Debug, Error)]
pub enum FontPeekError {
    #[error("Parameter rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Metadata query failed: {0}")]
    Metadata(#[from] MetadataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameter validation errors
///
/// Raised before any tool is invoked; a rejected parameter never
/// reaches the command line.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unrecognized parameter: {0}")]
    UnknownParam(String),

    #[error("Non-positive value for {name}: {value:?}")]
    NonPositive { name: String, value: String },

    #[error("Unknown direction: {0:?} (expected ltr, rtl, ttb or btt)")]
    UnknownDirection(String),

    #[error("Parameter string is not valid hex: {0:?}")]
    BadHex(String),

    #[error("Decoded parameter text is not valid UTF-8")]
    BadUtf8,
}

/// Shaping tool errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Shaping tool not found: {0}")]
    ToolMissing(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Signal terminations report status -1.
    #[error("Shaping tool exited with status {status}: {stderr}")]
    ToolFailed { status: i32, stderr: String },

    #[error("Shaping tool timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Shaping tool wrote no output at {}", .0.display())]
    MissingOutput(PathBuf),
}

/// Metadata tool errors
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata tool not found: {0}")]
    ToolMissing(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Metadata tool exited with status {status}: {stderr}")]
    ToolFailed { status: i32, stderr: String },

    #[error("Metadata tool timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Unparseable metadata response: {0:?}")]
    Unparseable(String),
}
