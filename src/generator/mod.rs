//! Single-attempt completion generation.
//!
//! One call = one prompt built, one model request issued, one code string
//! extracted. Failures stay inside this module: the orchestrator above only
//! ever sees a completion string, empty when the attempt failed.

use std::sync::Arc;

use tracing::warn;

use crate::error::LlmError;
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::prompts::build_completion_prompt;
use crate::utils::extract_code_from_response;

/// Drives one complete generation attempt per call.
pub struct CompletionGenerator {
    /// The LLM backend to issue requests against.
    provider: Arc<dyn LlmProvider>,
    /// Model identifier for every request.
    model: String,
    /// Sampling temperature for every request.
    temperature: f64,
    /// Token cap for every request.
    max_tokens: u32,
}

impl CompletionGenerator {
    /// Create a generator bound to a provider and fixed sampling settings.
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        temperature: f64,
        max_tokens: u32,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Generate one completion for a problem instruction.
    ///
    /// Issues exactly one outbound model call; there is no retry or backoff.
    /// Any failure along the way (request, API, response parsing) is logged
    /// with the task context and collapsed into an empty completion, so a
    /// single bad task can never abort a run.
    pub async fn generate(&self, task_id: &str, instruction: &str) -> String {
        match self.attempt(instruction).await {
            Ok(code) => code,
            Err(error) => {
                warn!(task_id = %task_id, error = %error, "Completion attempt failed");
                String::new()
            }
        }
    }

    /// One fallible generation attempt: prompt, model call, extraction.
    async fn attempt(&self, instruction: &str) -> Result<String, LlmError> {
        let prompt = build_completion_prompt(instruction);

        let request = GenerationRequest::new(self.model.clone(), vec![Message::user(prompt)])
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let response = self.provider.generate(request).await?;
        let content = response
            .first_content()
            .ok_or_else(|| LlmError::ParseError("No content in model response".to_string()))?;

        Ok(extract_code_from_response(content))
    }
}
