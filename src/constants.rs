//! Application constants for availability conversion
//!
//! Header prefixes recognised in fdsnws-availability output and the
//! fixed field counts of the input records and SYNC lines.

// =============================================================================
// Input Format
// =============================================================================

/// Prefix marking header and comment lines
pub const COMMENT_PREFIX: char = '#';

/// Prefix of the GeoCSV header line declaring the field delimiter
pub const DELIMITER_DIRECTIVE: &str = "#delimiter:";

/// Prefix of the column description line
pub const FIELD_HEADER_PREFIX: &str = "Network";

/// Fields per record: network, station, location, channel, quality,
/// sample rate, start, end
pub const RECORD_FIELD_COUNT: usize = 8;

// =============================================================================
// SYNC Output Format
// =============================================================================

/// Default Data Collection Center identifier for the SYNC header
pub const DEFAULT_DCC_ID: &str = "DCC";

/// SYNC field separator
pub const SYNC_SEPARATOR: &str = "|";

/// Fields in a SYNC time span line
pub const SYNC_FIELD_COUNT: usize = 15;

/// chrono format for a SEED ordinal date (`YYYY,DDD`)
pub const SEED_DATE_FORMAT: &str = "%Y,%j";

/// chrono format for the calendar date part of an input timestamp
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
