//! availability2sync library
//!
//! Converts fdsnws-availability web service output (text or GeoCSV) into
//! the legacy SYNC format used to synchronise data holdings between
//! archives.
//!
//! This library provides tools for:
//! - Reading availability records with GeoCSV `#delimiter:` detection
//! - Re-encoding ISO-8601 calendar timestamps as SEED ordinal dates
//! - Writing the SYNC header and fixed-layout time span lines

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod header;
pub mod models;
pub mod processor;
pub mod reader;
pub mod seed_time;

pub use config::{InputSource, SyncConfig};
pub use error::{Result, SyncError};
pub use models::{Delimiter, ProcessingStats, Record, TimeSpan};
