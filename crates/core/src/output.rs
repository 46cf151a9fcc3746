//! Scraping per-file errors out of captured tool output

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ERROR_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ERR (.+) Transformation error").expect("error marker regex"));

static SYNTAX_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SyntaxError: .+").expect("syntax error regex"));

/// A per-file failure the tool reported in its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformError {
    pub filename: String,
    pub summary: String,
}

/// Extract per-file transformation errors from captured output.
///
/// Both patterns are scanned independently over the whole text in
/// document order and paired by rank: the i-th `ERR` marker takes the
/// i-th `SyntaxError` line, and markers beyond the number of syntax
/// lines produce no record. With consecutive failures this can attach
/// a summary to the wrong file; existing consumers match on this
/// pairing, so it is kept as-is.
pub fn parse_errors(output: &str) -> Vec<TransformError> {
    ERROR_MARKER
        .captures_iter(output)
        .zip(SYNTAX_ERROR.find_iter(output))
        .map(|(marker, syntax)| TransformError {
            filename: marker[1].to_string(),
            summary: syntax.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_error_is_paired_with_following_syntax_line() {
        let output = "\
Processing 3 files...
ERR foo.js Transformation error
SyntaxError: Unexpected token
All done.";

        assert_eq!(
            parse_errors(output),
            vec![TransformError {
                filename: "foo.js".to_string(),
                summary: "SyntaxError: Unexpected token".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_marker_yields_no_records() {
        let output = "\
Processing 3 files...
SyntaxError: Unexpected token
All done.";

        assert!(parse_errors(output).is_empty());
    }

    #[test]
    fn test_unpaired_marker_produces_no_record() {
        let output = "\
ERR a.js Transformation error
SyntaxError: Unexpected token (3:7)
ERR b.js Transformation error";

        let errors = parse_errors(output);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].filename, "a.js");
    }

    #[test]
    fn test_pairing_follows_document_order() {
        let output = "\
ERR a.js Transformation error
ERR b.js Transformation error
SyntaxError: Unexpected token (1:1)
SyntaxError: Unexpected identifier (9:4)";

        let errors = parse_errors(output);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].filename, "a.js");
        assert_eq!(errors[0].summary, "SyntaxError: Unexpected token (1:1)");
        assert_eq!(errors[1].filename, "b.js");
        assert_eq!(
            errors[1].summary,
            "SyntaxError: Unexpected identifier (9:4)"
        );
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_errors("").is_empty());
    }
}
