//! Parsers for the three inputs of a cross-check.
//!
//! - **Raw data** ([`raw_data`]): tab-delimited download, SNP in column 0, call in column 3
//! - **Key file** ([`key`]): tab-delimited, API position index in column 0, SNP in column 1
//! - **API data** ([`api`]): packed two-character calls, JSON-wrapped or as a raw stream
//!
//! ## Malformed Input
//!
//! Failing to open a file is always an error. What happens on a malformed line
//! is governed by [`ParseMode`]:
//!
//! | Mode | Malformed line / read error |
//! |------|-----------------------------|
//! | [`ParseMode::Tolerant`] | reading stops, everything before it is kept |
//! | [`ParseMode::Strict`]   | the parse fails with the offending line number |
//!
//! Tolerant mode is the default. A truncated parse is only visible in debug logs
//! and in the smaller comparison set it produces.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genotype_crosscheck::parsing::{api, key, raw_data, ParseMode};
//! use std::path::Path;
//!
//! let raw = raw_data::parse_raw_data_file(Path::new("genome.txt"), ParseMode::Tolerant).unwrap();
//! let index = key::parse_key_file(Path::new("snps.data"), ParseMode::Tolerant).unwrap();
//! let genome = api::parse_api_file(
//!     Path::new("genome.json"),
//!     api::ApiFormat::Auto,
//!     ParseMode::Tolerant,
//! )
//! .unwrap();
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

pub mod api;
pub mod key;
pub mod raw_data;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format on line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    #[error("Invalid API JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a loader reacts to malformed lines and mid-stream read errors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Stop reading at the first malformed line and keep what was read
    #[default]
    Tolerant,
    /// Fail on the first malformed line
    Strict,
}

impl ParseMode {
    /// Resolve a malformed-input condition.
    ///
    /// Returns `Ok(())` when the caller should end its read loop and keep what it
    /// has, or the error itself in strict mode.
    ///
    /// # Errors
    ///
    /// Returns `err` unchanged when the mode is [`ParseMode::Strict`].
    pub fn tolerate(self, err: ParseError) -> Result<(), ParseError> {
        match self {
            Self::Strict => Err(err),
            Self::Tolerant => {
                debug!("Stopping read early: {err}");
                Ok(())
            }
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open an input file for buffered reading, decompressing `.gz`/`.bgz` files on the fly
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
