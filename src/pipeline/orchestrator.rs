//! Sampling orchestrator.
//!
//! Runs the completion generator across the problem list for K rounds and
//! accumulates the result set. Execution is strictly sequential: round r+1
//! never starts before round r finished every task, and at most one model
//! call is in flight at any instant.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dataset::Problem;
use crate::export::Sample;
use crate::generator::CompletionGenerator;
use crate::llm::LlmProvider;

use super::config::PipelineConfig;

/// Counters for one sampling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Generation attempts issued: tasks (after truncation) x rounds.
    pub attempted: usize,
    /// Samples that made it into the result set.
    pub collected: usize,
    /// Attempts whose empty completion was discarded.
    pub dropped: usize,
}

/// Outcome of one sampling run: the result set plus its counters.
#[derive(Debug)]
pub struct RunReport {
    /// Accumulated samples in generation order.
    pub samples: Vec<Sample>,
    /// Attempt/collection counters for the run.
    pub stats: RunStats,
}

/// Coordinates generation rounds over the problem list.
pub struct SamplingOrchestrator {
    generator: CompletionGenerator,
    config: PipelineConfig,
}

impl SamplingOrchestrator {
    /// Create an orchestrator for the given provider and configuration.
    pub fn new(provider: Arc<dyn LlmProvider>, config: PipelineConfig) -> Self {
        let generator = CompletionGenerator::new(
            provider,
            config.model.clone(),
            config.temperature,
            config.max_tokens,
        );
        Self { generator, config }
    }

    /// Run all configured rounds over `problems` and return the result set.
    ///
    /// Problems beyond `limit` (when non-zero) are never attempted. Empty
    /// completions are dropped from the result set unless `include_empty`
    /// is set; either way they are visible in the returned stats. The
    /// accumulated samples live only in memory until the caller writes
    /// them, so a crash mid-run loses the whole run.
    pub async fn run(&self, problems: &[Problem]) -> RunReport {
        let tasks = if self.config.limit > 0 {
            &problems[..self.config.limit.min(problems.len())]
        } else {
            problems
        };

        let mut samples = Vec::new();
        let mut stats = RunStats::default();

        for round in 1..=self.config.num_samples {
            info!(
                round,
                total_rounds = self.config.num_samples,
                tasks = tasks.len(),
                "Starting generation round"
            );

            for (done, problem) in tasks.iter().enumerate() {
                let completion = self
                    .generator
                    .generate(&problem.task_id, &problem.prompt)
                    .await;
                stats.attempted += 1;

                if completion.is_empty() && !self.config.include_empty {
                    stats.dropped += 1;
                    warn!(task_id = %problem.task_id, round, "Dropping empty completion");
                } else {
                    stats.collected += 1;
                    samples.push(Sample {
                        task_id: problem.task_id.clone(),
                        completion,
                    });
                }

                debug!(
                    round,
                    completed = done + 1,
                    total = tasks.len(),
                    task_id = %problem.task_id,
                    "Round progress"
                );
            }
        }

        info!(
            attempted = stats.attempted,
            collected = stats.collected,
            dropped = stats.dropped,
            "Sampling finished"
        );

        RunReport { samples, stats }
    }
}
