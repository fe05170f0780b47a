use anyhow::Context;
use availability2sync::cli::{Args, setup_logging};
use availability2sync::config::{InputSource, SyncConfig};
use availability2sync::processor;
use clap::Parser;
use colored::*;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let config = SyncConfig::from_args(&args);

    match convert(&config) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn convert(config: &SyncConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    processor::run(config, out).with_context(|| match &config.input {
        InputSource::Stdin => {
            "Failed to convert availability from stdin".to_string()
        }
        InputSource::File(path) => {
            format!("Failed to convert {}", path.display())
        }
    })?;

    Ok(())
}
