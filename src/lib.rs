//! # genotype-crosscheck
//!
//! A library for cross-validating a person's genotype data from two sources.
//!
//! Consumer genotyping services hand out the same genome in two forms: a bulk
//! raw-data download listing one SNP per line, and a compact API response that
//! packs every call into a single string, two characters per SNP, whose positions
//! are defined by a separate key file. Both should agree. `genotype-crosscheck`
//! finds the positions where they don't.
//!
//! ## Features
//!
//! - **Two API shapes**: JSON from the genomes endpoint or the bare genotype string,
//!   auto-detected by default
//! - **False-alarm suppression**: notation-only differences such as `AA` vs `A`
//!   are not counted, with a configurable table
//! - **Tolerant or strict parsing**: stop quietly at malformed lines, or fail on them
//! - **Grouped report**: mismatches by (API call, raw-data call), most frequent first,
//!   as text, JSON, or TSV
//!
//! ## Example
//!
//! ```rust,no_run
//! use genotype_crosscheck::parsing::{api, key, raw_data, ParseMode};
//! use genotype_crosscheck::{Comparator, FalseAlarms};
//! use std::path::Path;
//!
//! let raw = raw_data::parse_raw_data_file(Path::new("genome.txt"), ParseMode::Tolerant).unwrap();
//! let index = key::parse_key_file(Path::new("snps.data"), ParseMode::Tolerant).unwrap();
//! let genome =
//!     api::parse_api_file(Path::new("genome.json"), api::ApiFormat::Auto, ParseMode::Tolerant)
//!         .unwrap();
//!
//! let false_alarms = FalseAlarms::default();
//! let comparison = Comparator::new(&index, &raw, &false_alarms).compare(&genome.calls);
//!
//! for m in comparison.sorted_mismatches() {
//!     println!("{}: {}", m.pair, m.count());
//! }
//! println!("{:.2}% same", comparison.match_percentage());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: SNP, call pair, and mismatch types
//! - [`parsing`]: Loaders for raw data, key files, and API data
//! - [`matching`]: Comparator and false-alarm table
//! - [`report`]: Text, JSON, and TSV report rendering
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::core::types::*;
pub use matching::{Comparator, Comparison, FalseAlarms};
pub use report::{Report, ReportOptions};
