//! Conversion run orchestration.
//!
//! Reads every record from the configured input, then writes the SYNC
//! document to the given sink. The header date is taken once reading is
//! complete.

use crate::config::SyncConfig;
use crate::error::Result;
use crate::formatter::print_sync;
use crate::models::ProcessingStats;
use crate::reader::read_input;
use chrono::{NaiveDate, Utc};
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Run a conversion dated with the current UTC day
pub fn run<W: Write>(config: &SyncConfig, out: W) -> Result<ProcessingStats> {
    run_on(config, out, || Utc::now().date_naive())
}

/// Run a conversion, asking `today` for the SYNC header date after the
/// input has been read
pub fn run_on<W, F>(config: &SyncConfig, out: W, today: F) -> Result<ProcessingStats>
where
    W: Write,
    F: FnOnce() -> NaiveDate,
{
    let start_time = Instant::now();

    config.validate()?;
    let records = read_input(config.input.open()?)?;
    info!("Read {} availability records", records.len());

    let lines_written = print_sync(out, &config.dcc_id, &records, today)?;

    let stats = ProcessingStats {
        records_read: records.len(),
        lines_written,
        processing_time_ms: start_time.elapsed().as_millis(),
    };
    info!(
        "Wrote {} SYNC lines in {}ms",
        stats.lines_written, stats.processing_time_ms
    );

    Ok(stats)
}
