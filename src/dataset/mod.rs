//! HumanEval problem dataset loading.
//!
//! Problems ship as line-delimited JSON, one problem per line, either plain
//! (`HumanEval.jsonl`) or gzip-compressed as distributed upstream
//! (`HumanEval.jsonl.gz`). The loader preserves dataset order; downstream
//! truncation and iteration rely on it.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// One HumanEval problem.
///
/// The pipeline only consumes `task_id` and `prompt`; the remaining fields
/// are carried through for inspection tooling and ignored otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Unique problem identifier (e.g., "HumanEval/0").
    pub task_id: String,
    /// Function signature and docstring the model must complete.
    pub prompt: String,
    /// Name of the function under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    /// Reference solution, unused by generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_solution: Option<String>,
    /// Test harness source, unused by generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
}

/// Read all problems from a JSONL file, preserving file order.
///
/// Files ending in `.gz` are decompressed on the fly. Blank lines are
/// skipped; any other unparseable line is fatal, since a broken dataset
/// invalidates the whole run.
pub fn read_problems<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    read_problems_from(BufReader::new(reader))
}

fn read_problems_from<R: BufRead>(reader: R) -> Result<Vec<Problem>, DatasetError> {
    let mut problems = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let problem: Problem = serde_json::from_str(&line).map_err(|source| {
            DatasetError::Malformed {
                line: idx + 1,
                source,
            }
        })?;
        problems.push(problem);
    }

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn problem_line(task_id: &str, prompt: &str) -> String {
        format!(
            r#"{{"task_id": "{}", "prompt": "{}", "entry_point": "f", "canonical_solution": "    return 1\n", "test": "def check(f): pass"}}"#,
            task_id, prompt
        )
    }

    #[test]
    fn test_read_problems_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        for i in 0..5 {
            writeln!(file, "{}", problem_line(&format!("HumanEval/{}", i), "def f():")).unwrap();
        }

        let problems = read_problems(file.path()).expect("should load");
        assert_eq!(problems.len(), 5);
        for (i, problem) in problems.iter().enumerate() {
            assert_eq!(problem.task_id, format!("HumanEval/{}", i));
        }
    }

    #[test]
    fn test_read_problems_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", problem_line("HumanEval/0", "def f():")).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", problem_line("HumanEval/1", "def g():")).unwrap();

        let problems = read_problems(file.path()).expect("should load");
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_read_problems_reports_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", problem_line("HumanEval/0", "def f():")).unwrap();
        writeln!(file, "not json at all").unwrap();

        let err = read_problems(file.path()).expect_err("should fail");
        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_problems_tolerates_minimal_records() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, r#"{{"task_id": "HumanEval/0", "prompt": "def f():"}}"#).unwrap();

        let problems = read_problems(file.path()).expect("should load");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].entry_point.is_none());
    }

    #[test]
    fn test_read_problems_gzip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("problems.jsonl.gz");

        let file = File::create(&path).expect("create gz file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, "{}", problem_line("HumanEval/0", "def f():")).unwrap();
        writeln!(encoder, "{}", problem_line("HumanEval/1", "def g():")).unwrap();
        encoder.finish().expect("finish gz");

        let problems = read_problems(&path).expect("should load gz");
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].task_id, "HumanEval/0");
    }

    #[test]
    fn test_read_problems_missing_file() {
        let err = read_problems("/nonexistent/problems.jsonl").expect_err("should fail");
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
