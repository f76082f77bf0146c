//! Code extraction from LLM responses.
//!
//! Models asked for "code only" still wrap their answer in markdown fences,
//! prepend prose, or occasionally return bare source text. This module pulls
//! the usable code out of whatever came back: the first fenced code block if
//! one exists, otherwise the whole response. Extraction never fails; the
//! worst case is a trimmed passthrough of the raw text.

use regex::Regex;

/// Extract source code from a raw LLM response.
///
/// Searches for the first fenced code block (opening marker, optional
/// language tag, body, closing marker), with the body allowed to span
/// multiple lines. When a block is found, its body is returned with
/// surrounding whitespace stripped. When no complete block is found
/// (including a fence that was opened but never closed), the entire
/// response is returned trimmed, on the assumption that the model skipped
/// the fencing but still answered with code.
///
/// Only the first block is used; any later blocks are ignored.
pub fn extract_code_from_response(response: &str) -> String {
    if let Some(body) = extract_from_code_block(response) {
        return body;
    }

    response.trim().to_string()
}

/// Extract the body of the first fenced code block, if any.
fn extract_from_code_block(content: &str) -> Option<String> {
    let re = Regex::new(r"```(?:\w+)?[ \t]*\r?\n?([\s\S]*?)```").ok()?;
    let caps = re.captures(content)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tagged_block_with_surrounding_text() {
        let response = "preamble ```python\ndef f(): return 1\n``` postamble";
        assert_eq!(extract_code_from_response(response), "def f(): return 1");
    }

    #[test]
    fn test_extract_untagged_block() {
        let response = "```\ndef f(): return 1\n```";
        assert_eq!(extract_code_from_response(response), "def f(): return 1");
    }

    #[test]
    fn test_fallback_without_fences() {
        let response = "def f(): return 1";
        assert_eq!(extract_code_from_response(response), "def f(): return 1");
    }

    #[test]
    fn test_fallback_trims_whitespace() {
        let response = "  \n def f(): return 1 \n\n";
        assert_eq!(extract_code_from_response(response), "def f(): return 1");
    }

    #[test]
    fn test_first_of_multiple_blocks_wins() {
        let response = "```python\nfirst = 1\n```\nsome text\n```python\nsecond = 2\n```";
        assert_eq!(extract_code_from_response(response), "first = 1");
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_full_text() {
        let response = "```python\ndef f(): return 1";
        assert_eq!(
            extract_code_from_response(response),
            "```python\ndef f(): return 1"
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let response = "preamble ```python\ndef f(): return 1\n``` postamble";
        let once = extract_code_from_response(response);
        let twice = extract_code_from_response(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiline_body_preserved() {
        let response = "```python\ndef f():\n    x = 1\n    return x\n```";
        assert_eq!(
            extract_code_from_response(response),
            "def f():\n    x = 1\n    return x"
        );
    }

    #[test]
    fn test_empty_block_yields_empty_string() {
        let response = "```python\n```";
        assert_eq!(extract_code_from_response(response), "");
    }
}
