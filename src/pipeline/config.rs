//! Pipeline configuration.

use thiserror::Error;

/// Default model to use for generation.
pub const DEFAULT_MODEL: &str = "openai/gpt-5.2-codex:nitro";

/// Errors produced by configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("num_samples must be at least 1")]
    ZeroSampleRounds,

    #[error("temperature {0} out of range [0.0, 2.0]")]
    TemperatureOutOfRange(f64),
}

/// Settings for one sampling run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model identifier passed to the provider on every request.
    pub model: String,
    /// Sampling temperature for every request.
    pub temperature: f64,
    /// Token cap for every request.
    pub max_tokens: u32,
    /// Cap on the number of problems processed; 0 means no cap.
    /// Truncation keeps the first N problems in dataset order.
    pub limit: usize,
    /// Number of independent generation rounds over the problem list.
    pub num_samples: usize,
    /// Record failed/empty completions as explicit empty-string samples
    /// instead of dropping them. Guarantees one output record per
    /// (task, round) pair for scorers that require it.
    pub include_empty: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: 3000,
            limit: 0,
            num_samples: 1,
            include_empty: false,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_samples == 0 {
            return Err(ConfigError::ZeroSampleRounds);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.temperature));
        }
        Ok(())
    }
}
