use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::parsing::{open_input, ParseError, ParseMode};

/// Token that starts the column header line of a key file
const HEADER_TOKEN: &str = "index";

/// Maps positions in the packed API genome to SNP identifiers
#[derive(Debug, Clone, Default)]
pub struct SnpIndex {
    snps: HashMap<usize, String>,
}

impl SnpIndex {
    /// The SNP at `index`, or `""` if the key file has no entry for it
    #[must_use]
    pub fn snp(&self, index: usize) -> &str {
        self.snps.get(&index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snps.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for SnpIndex {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self {
            snps: iter
                .into_iter()
                .map(|(index, snp)| (index, snp.into()))
                .collect(),
        }
    }
}

/// Parse a key file (plain or gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened. In strict mode, also
/// returns read errors and `ParseError::InvalidFormat` for malformed lines.
pub fn parse_key_file(path: &Path, mode: ParseMode) -> Result<SnpIndex, ParseError> {
    let reader = open_input(path)?;
    parse_key_reader(reader, mode)
}

/// Parse key lines: `index<TAB>snp[<TAB>...]`
///
/// Comment lines, empty lines, and the `index` header line are skipped. In
/// tolerant mode the first line whose index is not a non-negative integer ends
/// the read; all entries before it are kept.
///
/// # Errors
///
/// In strict mode, returns read errors and `ParseError::InvalidFormat` for lines
/// with an unparseable index or no SNP column.
pub fn parse_key_reader<R: BufRead>(reader: R, mode: ParseMode) -> Result<SnpIndex, ParseError> {
    let mut snps = HashMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                mode.tolerate(e.into())?;
                break;
            }
        };

        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') || line.starts_with(HEADER_TOKEN) {
            continue;
        }

        let mut fields = line.split('\t');
        let raw_index = fields.next().unwrap_or_default();

        let Ok(index) = raw_index.parse::<usize>() else {
            mode.tolerate(ParseError::InvalidFormat {
                line: i + 1,
                message: format!("invalid index '{raw_index}'"),
            })?;
            break;
        };

        let Some(snp) = fields.next() else {
            mode.tolerate(ParseError::InvalidFormat {
                line: i + 1,
                message: format!("no SNP column for index {index}"),
            })?;
            break;
        };

        snps.insert(index, snp.to_string());
    }

    info!("Loaded {} key entries", snps.len());

    Ok(SnpIndex { snps })
}
