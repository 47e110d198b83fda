//! Command-line interface for genotype-crosscheck.
//!
//! A single command that loads the three inputs, compares them, and prints the
//! mismatch report to stdout.
//!
//! ## Usage
//!
//! ```text
//! # Compare a raw data download against JSON from the genomes endpoint
//! genotype-crosscheck -r genome_Full_20240101.txt -a genome.json -k snps.data
//!
//! # API data saved as a bare genotype string, every difference counted
//! genotype-crosscheck -r genome.txt.gz -a genome.raw -k snps.data \
//!     --api-format raw --no-false-alarms
//!
//! # JSON output for scripting
//! genotype-crosscheck -r genome.txt -a genome.json -k snps.data --format json
//! ```

use clap::Parser;

pub mod compare;

#[derive(Parser)]
#[command(name = "genotype-crosscheck")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Report SNPs where a raw genotype download and API genotype data disagree")]
#[command(
    long_about = "genotype-crosscheck compares a raw data download against the packed genotype string returned by the genomes API.\n\nEach two-character call in the API string is mapped to a SNP through the key file and compared with the raw-data call for that SNP. Mismatches are grouped by (API call, raw-data call) and listed by frequency, followed by the overall match rate."
)]
pub struct Cli {
    #[command(flatten)]
    pub compare: compare::CompareArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
