//! CLI command definitions for eval-forge.
//!
//! One-shot commands: `generate` runs the full sampling pipeline against a
//! HumanEval problems file; `stats` summarizes an existing samples file.

use std::collections::BTreeMap;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::dataset;
use crate::error::LlmError;
use crate::export;
use crate::llm::LiteLlmClient;
use crate::pipeline::{PipelineConfig, SamplingOrchestrator, DEFAULT_MODEL};

/// Default problems file, as distributed by the HumanEval release.
const DEFAULT_PROBLEMS_FILE: &str = "data/HumanEval.jsonl.gz";

/// Default output path for generated samples.
const DEFAULT_OUTPUT_FILE: &str = "data/samples.jsonl";

/// HumanEval completion generator for LLM evaluation.
#[derive(Parser)]
#[command(name = "eval-forge")]
#[command(about = "Generate HumanEval completions for external scoring")]
#[command(version)]
#[command(
    long_about = "eval-forge asks an LLM to complete each HumanEval problem, extracts the code \
from the raw responses, and writes a scorer-ready samples.jsonl.\n\nExample usage:\n  \
eval-forge generate --limit 10 --num-samples 5 --output data/samples.jsonl"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate completions for every problem in the dataset.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Summarize an existing samples file.
    Stats(StatsArgs),
}

/// Arguments for `eval-forge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the HumanEval problems file (.jsonl or .jsonl.gz).
    #[arg(short = 'p', long, default_value = DEFAULT_PROBLEMS_FILE)]
    pub problems: String,

    /// Destination for the generated samples.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Cap the number of problems processed (first N in dataset order).
    /// 0 means all.
    #[arg(long, default_value = "0")]
    pub limit: usize,

    /// Number of samples to generate per task.
    #[arg(short = 'n', long = "num-samples", default_value = "1")]
    pub num_samples: usize,

    /// LLM model to use for generation.
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature.
    #[arg(long, default_value = "0.0")]
    pub temperature: f64,

    /// Token cap per completion request.
    #[arg(long, default_value = "3000")]
    pub max_tokens: u32,

    /// Record failed attempts as empty-string samples instead of dropping
    /// them, guaranteeing one record per (task, round) pair.
    #[arg(long)]
    pub include_empty: bool,

    /// OpenRouter API key (can also be set via OPENROUTER_API_KEY env var).
    #[arg(long, env = "OPENROUTER_API_KEY")]
    pub api_key: Option<String>,
}

/// Arguments for `eval-forge stats`.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Samples file to summarize.
    #[arg(short = 'i', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub input: String,
}

/// Parse CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Execute the command carried by an already-parsed [`Cli`].
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => generate_command(args).await,
        Commands::Stats(args) => stats_command(args),
    }
}

/// Run the full generation pipeline: load problems, sample, write output.
async fn generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let api_key = args.api_key.ok_or(LlmError::MissingApiKey)?;
    let client = Arc::new(LiteLlmClient::new_with_defaults(api_key));

    let problems = dataset::read_problems(&args.problems)?;
    info!(
        problems = problems.len(),
        path = %args.problems,
        "Loaded HumanEval problems"
    );

    let config = PipelineConfig {
        model: args.model,
        temperature: args.temperature,
        max_tokens: args.max_tokens,
        limit: args.limit,
        num_samples: args.num_samples,
        include_empty: args.include_empty,
    };
    config.validate()?;

    let orchestrator = SamplingOrchestrator::new(client, config);
    let report = orchestrator.run(&problems).await;

    let written = export::write_samples(&args.output, &report.samples)?;
    info!(
        written,
        attempted = report.stats.attempted,
        dropped = report.stats.dropped,
        output = %args.output,
        "Generation complete"
    );

    Ok(())
}

/// Print record counts for an existing samples file.
fn stats_command(args: StatsArgs) -> anyhow::Result<()> {
    let samples = export::read_samples(&args.input)?;

    let mut per_task: BTreeMap<&str, usize> = BTreeMap::new();
    let mut empty = 0usize;
    for sample in &samples {
        *per_task.entry(sample.task_id.as_str()).or_default() += 1;
        if sample.completion.is_empty() {
            empty += 1;
        }
    }

    println!(
        "{}: {} samples across {} tasks ({} empty)",
        args.input,
        samples.len(),
        per_task.len(),
        empty
    );
    for (task_id, count) in &per_task {
        println!("  {}: {}", task_id, count);
    }

    Ok(())
}
