//! Core data structures for availability conversion.
//!
//! Defines parsed records, the named time span view used by the SYNC
//! formatter, the input delimiter and run statistics.

use crate::constants::RECORD_FIELD_COUNT;
use crate::error::{Result, SyncError};

/// Field delimiter for data lines, resolved once per input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Split on runs of whitespace
    #[default]
    Whitespace,
    /// Split on a literal separator declared by a `#delimiter:` header
    Literal(String),
}

impl Delimiter {
    /// Split a trimmed data line into owned fields
    pub fn split(&self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
            Delimiter::Literal(token) => line.split(token.as_str()).map(str::to_string).collect(),
        }
    }
}

/// One data line of availability output, split into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the input
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// View the record as a time span, failing unless it has exactly
    /// eight fields
    pub fn time_span(&self) -> Result<TimeSpan<'_>> {
        match self.fields.as_slice() {
            [
                network,
                station,
                location,
                channel,
                quality,
                sample_rate,
                start,
                end,
            ] => Ok(TimeSpan {
                network,
                station,
                location,
                channel,
                quality,
                sample_rate,
                start,
                end,
            }),
            fields => Err(SyncError::FieldCount {
                line: self.line,
                expected: RECORD_FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }
}

/// Named fields of a well-formed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan<'a> {
    pub network: &'a str,
    pub station: &'a str,
    pub location: &'a str,
    pub channel: &'a str,
    pub quality: &'a str,
    pub sample_rate: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

/// Processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub records_read: usize,
    pub lines_written: usize,
    pub processing_time_ms: u128,
}
