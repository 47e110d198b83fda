use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::CallPair;
use crate::matching::{Comparator, FalseAlarms};
use crate::parsing::api::{self, ApiFormat};
use crate::parsing::{key, raw_data, ParseMode};
use crate::report::{Report, ReportOptions, DEFAULT_SNPS_PER_LINE};

#[derive(Args)]
pub struct CompareArgs {
    /// Raw data download: tab-delimited rsid, chromosome, position, genotype (may be gzipped)
    #[arg(short = 'r', long = "raw-data", value_name = "FILE")]
    pub raw_data: PathBuf,

    /// API data: JSON from the genomes endpoint or the bare genotype string
    #[arg(short = 'a', long = "api-data", value_name = "FILE")]
    pub api_data: PathBuf,

    /// Key file mapping API string positions to SNPs (e.g. snps.data)
    #[arg(short = 'k', long = "key", value_name = "FILE")]
    pub key: PathBuf,

    /// Shape of the API data file
    #[arg(long, value_enum, default_value = "auto")]
    pub api_format: ApiFormat,

    /// Count every differing call as a mismatch, including notation-only differences like AA|A
    #[arg(long, conflicts_with = "false_alarms")]
    pub no_false_alarms: bool,

    /// Additional API|RAW call pair to ignore (repeatable)
    #[arg(long = "false-alarm", value_name = "API|RAW", allow_hyphen_values = true)]
    pub false_alarms: Vec<CallPair>,

    /// List SNPs only for mismatch categories smaller than this
    #[arg(long, default_value = "1000")]
    pub snp_list_threshold: usize,

    /// Fail on malformed lines instead of stopping at them
    #[arg(long)]
    pub strict: bool,
}

impl CompareArgs {
    fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Tolerant
        }
    }

    fn false_alarm_table(&self) -> FalseAlarms {
        if self.no_false_alarms {
            return FalseAlarms::disabled();
        }
        let mut table = FalseAlarms::default();
        table.extend(self.false_alarms.iter().cloned());
        table
    }
}

/// Execute the comparison and print the report to stdout
///
/// # Errors
///
/// Returns an error if an input file cannot be opened, if strict parsing fails,
/// or if the report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mode = args.parse_mode();

    let raw = raw_data::parse_raw_data_file(&args.raw_data, mode)
        .with_context(|| format!("Failed to load raw data from {}", args.raw_data.display()))?;
    let index = key::parse_key_file(&args.key, mode)
        .with_context(|| format!("Failed to load key file {}", args.key.display()))?;
    let genome = api::parse_api_file(&args.api_data, args.api_format, mode)
        .with_context(|| format!("Failed to load API data from {}", args.api_data.display()))?;

    if verbose {
        eprintln!("Raw data: {} SNPs", raw.len());
        eprintln!("Key: {} positions", index.len());
        eprintln!(
            "API data: {} calls{}",
            genome.calls.len(),
            genome
                .id
                .as_deref()
                .map(|id| format!(" (profile {id})"))
                .unwrap_or_default()
        );
    }

    let false_alarms = args.false_alarm_table();
    if verbose {
        if false_alarms.is_enabled() {
            let mut pairs: Vec<String> = false_alarms.iter().map(ToString::to_string).collect();
            pairs.sort();
            eprintln!("Ignoring call pairs: {}", pairs.join(", "));
        } else {
            eprintln!("False-alarm suppression disabled");
        }
    }

    let comparison = Comparator::new(&index, &raw, &false_alarms).compare(&genome.calls);

    let options = ReportOptions {
        snp_list_threshold: args.snp_list_threshold,
        snps_per_line: DEFAULT_SNPS_PER_LINE,
    };
    let report = Report::new(&comparison, genome.id.as_deref(), options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_json(&mut out)?,
        OutputFormat::Tsv => report.write_tsv(&mut out)?,
    }
    out.flush()?;

    Ok(())
}
