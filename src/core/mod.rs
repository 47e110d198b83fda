//! Core data types for genotype cross-checking.
//!
//! - [`Snp`]: A SNP identifier, e.g. `rs12345`
//! - [`CallPair`]: An (API call, raw-data call) pair, the grouping key for disagreements
//! - [`Mismatch`]: A call pair plus the SNPs that exhibit it
//!
//! ## Genotype Calls
//!
//! A genotype call is a plain string of zero to two characters. The two sources
//! disagree on notation for some calls:
//!
//! | Source   | Homozygous A | No call |
//! |----------|--------------|---------|
//! | API      | `AA`         | `--` or `__` |
//! | Raw data | `A` or `AA`  | empty   |
//!
//! Calls carry no structure beyond string equality; notation differences are
//! handled by [`crate::matching::FalseAlarms`].

pub mod types;

pub use types::{CallPair, Mismatch, Snp};
