//! Rendering of a [`Comparison`] as text, JSON, or TSV.
//!
//! Mismatch categories are always listed by descending count. The SNPs behind a
//! category are only listed when the category is smaller than
//! [`ReportOptions::snp_list_threshold`], so very common disagreements do not
//! flood the output.

use std::io::{self, Write};

use crate::core::types::{Mismatch, Snp};
use crate::matching::Comparison;

/// Default category size at and above which SNP lists are omitted
pub const DEFAULT_SNP_LIST_THRESHOLD: usize = 1000;

/// SNP identifiers per line in text output
pub const DEFAULT_SNPS_PER_LINE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// List SNPs only for categories with fewer mismatches than this
    pub snp_list_threshold: usize,

    /// Wrap text SNP lists after this many identifiers
    pub snps_per_line: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            snp_list_threshold: DEFAULT_SNP_LIST_THRESHOLD,
            snps_per_line: DEFAULT_SNPS_PER_LINE,
        }
    }
}

/// A comparison ready to be written out
pub struct Report<'a> {
    comparison: &'a Comparison,
    api_id: Option<&'a str>,
    options: ReportOptions,
    mismatches: Vec<Mismatch>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(comparison: &'a Comparison, api_id: Option<&'a str>, options: ReportOptions) -> Self {
        Self {
            comparison,
            api_id,
            options,
            mismatches: comparison.sorted_mismatches(),
        }
    }

    fn lists_snps(&self, mismatch: &Mismatch) -> bool {
        mismatch.count() < self.options.snp_list_threshold
    }

    /// Write the human-readable report
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for mismatch in &self.mismatches {
            writeln!(
                out,
                "APICall: {}\tRawDataCall: {}\tTotal: {}",
                mismatch.pair.api_call,
                mismatch.pair.raw_data_call,
                mismatch.count()
            )?;

            if self.lists_snps(mismatch) {
                writeln!(
                    out,
                    "SNPS: {}",
                    wrap_snps(&mismatch.snps, self.options.snps_per_line)
                )?;
            }
            writeln!(out)?;
        }

        writeln!(
            out,
            "Same: {}, Mismatches: {}, Same: {:.6}%",
            self.comparison.matches,
            self.comparison.mismatches,
            self.comparison.match_percentage()
        )
    }

    /// Write the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer or from serialization.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let categories: Vec<serde_json::Value> = self
            .mismatches
            .iter()
            .map(|mismatch| {
                let mut category = serde_json::json!({
                    "api_call": mismatch.pair.api_call,
                    "raw_data_call": mismatch.pair.raw_data_call,
                    "count": mismatch.count(),
                });
                if self.lists_snps(mismatch) {
                    category["snps"] = serde_json::json!(mismatch.snps);
                }
                category
            })
            .collect();

        let output = serde_json::json!({
            "api_id": self.api_id,
            "matches": self.comparison.matches,
            "mismatches": self.comparison.mismatches,
            "match_percentage": self.comparison.match_percentage(),
            "mismatch_categories": categories,
        });

        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }

    /// Write one row per mismatch category, followed by a summary comment line
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "api_call\traw_data_call\tcount")?;
        for mismatch in &self.mismatches {
            writeln!(
                out,
                "{}\t{}\t{}",
                mismatch.pair.api_call,
                mismatch.pair.raw_data_call,
                mismatch.count()
            )?;
        }
        writeln!(
            out,
            "# matches={} mismatches={} match_percentage={:.4}",
            self.comparison.matches,
            self.comparison.mismatches,
            self.comparison.match_percentage()
        )
    }
}

/// Join SNPs with `", "`, breaking the line after every `per_line` identifiers
fn wrap_snps(snps: &[Snp], per_line: usize) -> String {
    snps.chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(Snp::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
