//! Position-by-position comparison of API calls against raw-data calls.
//!
//! - [`Comparator`]: Walks the decoded API calls and classifies each position
//! - [`Comparison`]: Match/mismatch totals and mismatches grouped by call pair
//! - [`FalseAlarms`]: Call pairs that differ only in notation and are not mismatches
//!
//! ## Classification
//!
//! For the API call at position `i`:
//!
//! 1. Look up the SNP for `i` in the key index (`""` if absent)
//! 2. Look up the raw-data call for that SNP (`""` if absent)
//! 3. Equal calls are a **match**
//! 4. A pair in the false-alarm table (e.g. `AA|A`) is also a **match**
//! 5. Anything else is a **mismatch**, recorded under its call pair
//!
//! ## Example
//!
//! ```rust
//! use genotype_crosscheck::matching::{Comparator, FalseAlarms};
//! use genotype_crosscheck::parsing::key::SnpIndex;
//! use genotype_crosscheck::parsing::raw_data::RawGenotypes;
//!
//! let index: SnpIndex = [(0, "rs1"), (1, "rs2")].into_iter().collect();
//! let raw: RawGenotypes = [("rs1", "A"), ("rs2", "GA")].into_iter().collect();
//! let false_alarms = FalseAlarms::default();
//!
//! let comparison = Comparator::new(&index, &raw, &false_alarms).compare(["AA", "AG"]);
//! assert_eq!(comparison.matches, 1);
//! assert_eq!(comparison.mismatches, 1);
//! ```

pub mod comparator;
pub mod false_alarms;

pub use comparator::{Comparator, Comparison};
pub use false_alarms::FalseAlarms;
