//! fdsnws-availability input reader.
//!
//! Reads the whole input, resolves the delimiter from its header lines and
//! splits every data line into a [`Record`]. Field counts are not checked
//! here; see [`Record::time_span`].

use crate::error::Result;
use crate::header::{LineKind, classify_line, detect_delimiter};
use crate::models::{Delimiter, Record};
use std::io::BufRead;
use tracing::debug;

/// Read all availability records from `reader`
pub fn read_input<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;

    let delimiter = detect_delimiter(&lines)?;
    debug!("Using delimiter {:?} for {} lines", delimiter, lines.len());

    parse_records(&lines, &delimiter)
}

/// Split every data line of `lines` with `delimiter`, preserving order
pub fn parse_records<S: AsRef<str>>(lines: &[S], delimiter: &Delimiter) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (idx, line) in lines.iter().enumerate() {
        let line_num = idx + 1;
        let line = line.as_ref();

        match classify_line(line_num, line)? {
            LineKind::Data => {
                records.push(Record::new(line_num, delimiter.split(line.trim())));
            }
            LineKind::Comment | LineKind::Delimiter(_) | LineKind::FieldHeader => {
                skipped += 1;
            }
        }
    }

    debug!(
        "Parsed {} records, skipped {} header lines",
        records.len(),
        skipped
    );

    Ok(records)
}
