//! Command-line interface for eval-forge.
//!
//! Provides commands for completion generation and sample-file inspection.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
