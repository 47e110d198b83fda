use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::parsing::{open_input, ParseError, ParseMode};

/// Minimum number of tab-separated fields on a raw-data line (rsid, chromosome, position, call)
const MIN_FIELDS: usize = 4;

/// Genotype calls from a raw-data download, keyed by SNP identifier
#[derive(Debug, Clone, Default)]
pub struct RawGenotypes {
    calls: HashMap<String, String>,
}

impl RawGenotypes {
    /// The call observed for `snp`, or `""` if the SNP is not in the download
    #[must_use]
    pub fn call(&self, snp: &str) -> &str {
        self.calls.get(snp).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl<S: Into<String>, C: Into<String>> FromIterator<(S, C)> for RawGenotypes {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        Self {
            calls: iter
                .into_iter()
                .map(|(snp, call)| (snp.into(), call.into()))
                .collect(),
        }
    }
}

/// Parse a raw-data download (plain or gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened. In strict mode, also
/// returns read errors and `ParseError::InvalidFormat` for malformed lines.
pub fn parse_raw_data_file(path: &Path, mode: ParseMode) -> Result<RawGenotypes, ParseError> {
    let reader = open_input(path)?;
    parse_raw_data_reader(reader, mode)
}

/// Parse raw-data lines: `rsid<TAB>chromosome<TAB>position<TAB>genotype`
///
/// Lines starting with `#` and empty lines are skipped. If a SNP appears twice,
/// the later call wins.
///
/// # Errors
///
/// In strict mode, returns read errors and `ParseError::InvalidFormat` for lines
/// with fewer than four fields. In tolerant mode those end the read instead.
pub fn parse_raw_data_reader<R: BufRead>(
    reader: R,
    mode: ParseMode,
) -> Result<RawGenotypes, ParseError> {
    let mut calls = HashMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                mode.tolerate(e.into())?;
                break;
            }
        };

        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(snp), Some(call)) = (fields.next(), fields.nth(2)) else {
            mode.tolerate(ParseError::InvalidFormat {
                line: i + 1,
                message: format!(
                    "expected at least {MIN_FIELDS} tab-separated fields, found {}",
                    line.split('\t').count()
                ),
            })?;
            break;
        };

        calls.insert(snp.to_string(), call.to_string());
    }

    info!("Loaded {} raw-data calls", calls.len());

    Ok(RawGenotypes { calls })
}
