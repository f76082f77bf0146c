//! JSONL sample record store.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// One generated sample: a task identifier paired with extracted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Identifier of the problem this completion answers.
    pub task_id: String,
    /// Extracted source code for the attempt.
    pub completion: String,
}

/// Write all samples to `path` as one JSON record per line.
///
/// Any existing content at the path is replaced; parent directories are
/// created as needed. The whole result set is written in one pass at the
/// end of a run, with a single flush. Returns the number of records
/// written.
pub fn write_samples<P: AsRef<Path>>(path: P, samples: &[Sample]) -> Result<usize, ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for sample in samples {
        let record = serde_json::to_string(sample)?;
        writeln!(writer, "{}", record)?;
    }

    writer.flush()?;
    Ok(samples.len())
}

/// Read samples back from a JSONL record store.
///
/// Blank lines are skipped. Used for round-trip verification and the
/// `stats` command; the generation pipeline itself never reads its output.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, ExportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(serde_json::from_str(&line)?);
    }

    Ok(samples)
}
