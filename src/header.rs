//! fdsnws-availability header parsing.
//!
//! Classifies input lines into comments, the GeoCSV delimiter directive,
//! the column description header and data, and resolves the delimiter
//! for the whole input from a scan of its header lines.

use crate::constants::{COMMENT_PREFIX, DELIMITER_DIRECTIVE, FIELD_HEADER_PREFIX};
use crate::error::{Result, SyncError};
use crate::models::Delimiter;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DELIMITER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#delimiter:\s*(\S+)").expect("delimiter pattern is valid")
});

/// Role of a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#` header or comment line
    Comment,
    /// `#delimiter:<token>` header line
    Delimiter(String),
    /// `Network ...` column description line
    FieldHeader,
    /// Anything else
    Data,
}

/// Classify one input line. `line_num` is 1-based and only used in errors.
pub fn classify_line(line_num: usize, line: &str) -> Result<LineKind> {
    if line.starts_with(COMMENT_PREFIX) {
        if line.starts_with(DELIMITER_DIRECTIVE) {
            return parse_delimiter_directive(line_num, line).map(LineKind::Delimiter);
        }
        return Ok(LineKind::Comment);
    }

    if line.starts_with(FIELD_HEADER_PREFIX) {
        return Ok(LineKind::FieldHeader);
    }

    Ok(LineKind::Data)
}

/// Extract the first non-whitespace token following `#delimiter:`
fn parse_delimiter_directive(line_num: usize, line: &str) -> Result<String> {
    DELIMITER_PATTERN
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|token| token.as_str().to_string())
        .ok_or_else(|| SyncError::InvalidHeader {
            line: line_num,
            reason: "delimiter directive has no delimiter token".to_string(),
        })
}

/// Resolve the delimiter for the whole input. The last directive wins;
/// without one, data lines are split on whitespace.
pub fn detect_delimiter<S: AsRef<str>>(lines: &[S]) -> Result<Delimiter> {
    let mut delimiter = Delimiter::Whitespace;

    for (idx, line) in lines.iter().enumerate() {
        if let LineKind::Delimiter(token) = classify_line(idx + 1, line.as_ref())? {
            debug!("Delimiter directive on line {}: '{}'", idx + 1, token);
            delimiter = Delimiter::Literal(token);
        }
    }

    Ok(delimiter)
}
