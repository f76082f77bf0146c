//! Sample export for external scoring.
//!
//! The result set is persisted as line-delimited JSON, the format the
//! HumanEval scorer consumes: one `{"task_id": ..., "completion": ...}`
//! record per line.

mod samples;

pub use samples::{read_samples, write_samples, Sample};
