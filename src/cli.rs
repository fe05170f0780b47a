//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Convert output from an fdsnws-availability request to the legacy SYNC format.
The fdsnws-availability output is defined in the web service specification:
https://fdsn.org/webservices/

The fdsnws-availability output should be the full granularity of the selected
data, i.e. using the \"query\" method. Output from the \"extent\" method does not
contain gaps or overlaps and is not suitable for most uses of SYNC output.";

#[derive(Parser, Debug)]
#[command(name = "availability2sync")]
#[command(about = "Convert fdsnws-availability output to legacy SYNC format")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Input fdsnws-availability result file (default: stdin)
    #[arg(value_name = "INFILE")]
    pub infile: Option<PathBuf>,

    /// DCC ID to use in SYNC header
    #[arg(long, default_value = crate::constants::DEFAULT_DCC_ID)]
    pub dccid: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Log level selected by the verbosity flag
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Set up structured logging on stderr; stdout carries SYNC output.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("availability2sync={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    tracing::debug!("Logging initialized at level: {}", log_level);
}
