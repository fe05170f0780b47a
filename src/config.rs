//! Configuration management and validation.
//!
//! Holds the settings of a conversion run: where availability records are
//! read from and which Data Collection Center identifier heads the SYNC
//! output.

use crate::cli::Args;
use crate::constants::DEFAULT_DCC_ID;
use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of fdsnws-availability text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputSource {
    /// Standard input
    #[default]
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Map an optional CLI path to a source; `-` means stdin
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => InputSource::File(p.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Open the source for line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => {
                debug!("Reading availability from stdin");
                Ok(Box::new(BufReader::new(io::stdin())))
            }
            InputSource::File(path) => {
                debug!("Reading availability from {}", path.display());
                let file = File::open(path).map_err(SyncError::Io)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Settings for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Data Collection Center identifier for the SYNC header
    pub dcc_id: String,

    /// Where records are read from
    pub input: InputSource,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            dcc_id: DEFAULT_DCC_ID.to_string(),
            input: InputSource::Stdin,
        }
    }
}

impl SyncConfig {
    /// Build a configuration from parsed command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            dcc_id: args.dccid.clone(),
            input: InputSource::from_path(args.infile.as_deref()),
        }
    }

    /// Check that the input file exists before any output is produced
    pub fn validate(&self) -> Result<()> {
        if let InputSource::File(path) = &self.input {
            if !path.exists() {
                return Err(SyncError::InputNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}
