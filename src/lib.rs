//! eval-forge: HumanEval completion-generation harness.
//!
//! This library drives a language model over the HumanEval benchmark:
//! it builds a prompt per problem, extracts code from the model's reply,
//! and accumulates scorer-ready samples across one or more rounds.

// Core modules
pub mod cli;
pub mod dataset;
pub mod error;
pub mod export;
pub mod generator;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod utils;

// Re-export commonly used error types
pub use error::{DatasetError, ExportError, LlmError};
