//! Error types for eval-forge operations.
//!
//! Defines error types for the major subsystems:
//! - Problem dataset loading
//! - LLM API interactions
//! - Sample export (JSONL record store)

use thiserror::Error;

/// Errors that can occur while loading the problem dataset.
///
/// Dataset failures indicate a broken precondition of the whole run and are
/// always fatal; they are never absorbed by the per-task failure boundary.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed problem record at line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: pass --api-key or set OPENROUTER_API_KEY")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },
}

/// Errors that can occur while writing or reading the sample record store.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
