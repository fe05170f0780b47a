//! SYNC output formatting.
//!
//! Writes the SYNC header line followed by one fixed-layout time span line
//! per record. Output stops at the first record that cannot be formatted;
//! lines already written are flushed to the sink before the error returns.

use crate::constants::{SYNC_FIELD_COUNT, SYNC_SEPARATOR};
use crate::error::Result;
use crate::models::{Record, TimeSpan};
use crate::seed_time::{seed_date, seed_datetime};
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

/// Line-oriented SYNC writer over any byte sink
pub struct SyncWriter<W: Write> {
    out: W,
    lines_written: usize,
}

impl<W: Write> SyncWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
        }
    }

    /// Write `<dcc_id>|<YYYY>,<DDD>`
    pub fn write_header(&mut self, dcc_id: &str, date: NaiveDate) -> Result<()> {
        writeln!(self.out, "{}{}{}", dcc_id, SYNC_SEPARATOR, seed_date(date))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write the SYNC line for one record
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let line = format_time_span(&record.time_span()?)?;
        writeln!(self.out, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Build the 15-field SYNC line for a time span
pub fn format_time_span(span: &TimeSpan<'_>) -> Result<String> {
    let seed_start = seed_datetime(span.start)?;
    let seed_end = seed_datetime(span.end)?;

    let fields: [&str; SYNC_FIELD_COUNT] = [
        span.network,
        span.station,
        span.location,
        span.channel,
        &seed_start,
        &seed_end,
        "",
        span.sample_rate,
        "",
        "",
        "",
        span.quality,
        "",
        "",
        "",
    ];

    Ok(fields.join(SYNC_SEPARATOR))
}

/// Write a complete SYNC document for `records`. `today` is called once,
/// when the header line is written.
///
/// Returns the number of lines written.
pub fn print_sync<W, F>(out: W, dcc_id: &str, records: &[Record], today: F) -> Result<usize>
where
    W: Write,
    F: FnOnce() -> NaiveDate,
{
    let mut writer = SyncWriter::new(out);

    if let Err(err) = write_all(&mut writer, dcc_id, records, today) {
        // Lines before the failing record stay in the output
        let _ = writer.flush();
        return Err(err);
    }
    writer.flush()?;

    debug!("Wrote {} SYNC lines", writer.lines_written());
    Ok(writer.lines_written())
}

fn write_all<W, F>(
    writer: &mut SyncWriter<W>,
    dcc_id: &str,
    records: &[Record],
    today: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce() -> NaiveDate,
{
    writer.write_header(dcc_id, today())?;
    for record in records {
        writer.write_record(record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;

    fn record(line: usize, values: &[&str]) -> Record {
        Record::new(line, values.iter().map(|v| v.to_string()).collect())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    #[test]
    fn test_header_line() {
        let mut writer = SyncWriter::new(Vec::new());
        writer.write_header("XX", today()).unwrap();

        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "XX|2024,041\n");
    }

    #[test]
    fn test_record_line_layout() {
        let rec = record(
            1,
            &[
                "NET",
                "STA",
                "LOC",
                "CHA",
                "Q",
                "100",
                "2020-01-01T00:00:00.000000Z",
                "2020-01-02T00:00:00.000000Z",
            ],
        );
        let line = format_time_span(&rec.time_span().unwrap()).unwrap();

        assert_eq!(
            line,
            "NET|STA|LOC|CHA|2020,001,00:00:00.000000|2020,002,00:00:00.000000||100|||||Q||||"
        );
        assert_eq!(line.split('|').count(), SYNC_FIELD_COUNT);
    }

    #[test]
    fn test_empty_location_keeps_its_slot() {
        let rec = record(
            1,
            &["IU", "ANMO", "", "BHZ", "M", "40", "2020-01-01T00:00:00Z", "2020-01-01T01:00:00Z"],
        );
        let line = format_time_span(&rec.time_span().unwrap()).unwrap();

        assert!(line.starts_with("IU|ANMO||BHZ|2020,001,00:00:00|"));
    }

    #[test]
    fn test_print_sync_emits_header_plus_records() {
        let records = vec![
            record(1, &["A", "B", "C", "D", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
            record(2, &["E", "F", "G", "H", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
        ];
        let mut out = Vec::new();

        let written = print_sync(&mut out, "DCC", &records, today).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written, 3);
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().next().unwrap(), "DCC|2024,041");
    }

    #[test]
    fn test_malformed_record_stops_output() {
        let records = vec![
            record(1, &["A", "B", "C", "D", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
            record(2, &["E", "F", "G"]),
            record(3, &["I", "J", "K", "L", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
        ];
        let mut out = Vec::new();

        let err = print_sync(&mut out, "DCC", &records, today).unwrap_err();
        let text = String::from_utf8(out).unwrap();

        assert!(matches!(err, SyncError::FieldCount { line: 2, found: 3, .. }));
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("A|B|C|D|"));
    }

    /// Sink that accepts writes but fails every flush
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("flush failed"))
        }
    }

    #[test]
    fn test_record_error_survives_flush_failure() {
        let records = vec![record(1, &["E", "F", "G"])];

        let err = print_sync(FailingFlush(Vec::new()), "DCC", &records, today).unwrap_err();

        assert!(matches!(err, SyncError::FieldCount { line: 1, found: 3, .. }));
    }

    #[test]
    fn test_flush_failure_reported_on_success() {
        let err = print_sync(FailingFlush(Vec::new()), "DCC", &[], today).unwrap_err();

        assert!(matches!(err, SyncError::Io(_)));
    }

    #[test]
    fn test_clock_read_once() {
        let calls = std::cell::Cell::new(0);
        let records = vec![
            record(1, &["A", "B", "C", "D", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
            record(2, &["E", "F", "G", "H", "Q", "1", "2020-01-01T00:00:00Z", "2020-01-01T00:00:01Z"]),
        ];
        let mut out = Vec::new();

        print_sync(&mut out, "DCC", &records, || {
            calls.set(calls.get() + 1);
            today()
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bad_timestamp_stops_output() {
        let records = vec![record(
            1,
            &["A", "B", "C", "D", "Q", "1", "20200101", "2020-01-01T00:00:01Z"],
        )];
        let mut out = Vec::new();

        let err = print_sync(&mut out, "DCC", &records, today).unwrap_err();

        assert!(matches!(err, SyncError::InvalidTimestamp { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "DCC|2024,041\n");
    }
}
