//! Decoder for API genotype data.
//!
//! The API returns a person's genome as one packed string with two characters per
//! SNP: the call for key-file index `i` lives at byte offset `2 * i`. The string
//! arrives in one of two shapes:
//!
//! - **JSON**: `{"id": "<profile id>", "genome": "AAGGCT--..."}`
//! - **Raw**: just the packed string, e.g. `AAGGCT--...`
//!
//! Both shapes are decoded by the same [`CallChunks`] iterator. A trailing odd
//! byte cannot form a call and is dropped.

use std::io::{self, BufRead, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::parsing::{open_input, ParseError, ParseMode};

/// Shape of the API data file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ApiFormat {
    /// JSON if the first non-whitespace byte is `{`, raw otherwise
    #[default]
    Auto,
    /// `{"id": ..., "genome": ...}` object from the genomes endpoint
    Json,
    /// Bare packed genotype string
    Raw,
}

/// Body of the genomes endpoint
#[derive(Debug, Default, Deserialize)]
struct GenomesEndpoint {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    genome: String,
}

/// Decoded API genotype data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiGenome {
    /// Profile ID, present only for JSON input
    pub id: Option<String>,

    /// One call per position, in stream order
    pub calls: Vec<String>,
}

/// Iterator over two-byte genotype calls read from a packed stream.
///
/// Ends at EOF (dropping an odd trailing byte) or at the first line terminator.
pub struct CallChunks<R> {
    reader: R,
    done: bool,
}

impl<R: Read> CallChunks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> Iterator for CallChunks<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut pair = [0u8; 2];
        let mut filled = 0;
        while filled < pair.len() {
            match self.reader.read(&mut pair[filled..]) {
                Ok(0) => {
                    self.done = true;
                    if filled > 0 {
                        debug!("Dropping trailing orphan byte {:?}", pair[0] as char);
                    }
                    return None;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        if pair.iter().any(|b| matches!(b, b'\r' | b'\n')) {
            self.done = true;
            return None;
        }

        Some(Ok(String::from_utf8_lossy(&pair).into_owned()))
    }
}

/// Parse an API data file (plain or gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened. In strict mode, also
/// returns `ParseError::Json` for unparseable JSON and mid-stream read errors.
pub fn parse_api_file(
    path: &Path,
    format: ApiFormat,
    mode: ParseMode,
) -> Result<ApiGenome, ParseError> {
    let reader = open_input(path)?;
    parse_api_reader(reader, format, mode)
}

/// Decode API data from a reader
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be peeked for format detection.
/// In strict mode, also returns `ParseError::Json` for unparseable JSON and
/// mid-stream read errors. In tolerant mode, unparseable JSON yields no calls.
pub fn parse_api_reader<R: BufRead>(
    mut reader: R,
    format: ApiFormat,
    mode: ParseMode,
) -> Result<ApiGenome, ParseError> {
    let format = match format {
        ApiFormat::Auto => detect_format(&mut reader)?,
        explicit => explicit,
    };
    debug!("Decoding API data as {format:?}");

    let genome = if format == ApiFormat::Json {
        let endpoint: GenomesEndpoint = match serde_json::from_reader(reader) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                mode.tolerate(e.into())?;
                GenomesEndpoint::default()
            }
        };
        ApiGenome {
            id: endpoint.id,
            calls: collect_calls(CallChunks::new(endpoint.genome.as_bytes()), mode)?,
        }
    } else {
        ApiGenome {
            id: None,
            calls: collect_calls(CallChunks::new(reader), mode)?,
        }
    };

    info!("Decoded {} API calls", genome.calls.len());

    Ok(genome)
}

/// Pick JSON or raw by peeking at the first non-whitespace byte without consuming it
fn detect_format<R: BufRead>(reader: &mut R) -> io::Result<ApiFormat> {
    let buf = reader.fill_buf()?;
    let first = buf.iter().find(|b| !b.is_ascii_whitespace());

    Ok(if first == Some(&b'{') {
        ApiFormat::Json
    } else {
        ApiFormat::Raw
    })
}

fn collect_calls<R: Read>(chunks: CallChunks<R>, mode: ParseMode) -> Result<Vec<String>, ParseError> {
    let mut calls = Vec::new();
    for call in chunks {
        match call {
            Ok(call) => calls.push(call),
            Err(e) => {
                mode.tolerate(e.into())?;
                break;
            }
        }
    }
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str, format: ApiFormat) -> ApiGenome {
        parse_api_reader(input.as_bytes(), format, ParseMode::Strict).unwrap()
    }

    #[test]
    fn test_even_length_yields_half_as_many_calls() {
        let genome = decode("AAGGCT--", ApiFormat::Raw);
        assert_eq!(genome.calls, vec!["AA", "GG", "CT", "--"]);
        assert!(genome.id.is_none());
    }

    #[test]
    fn test_odd_trailing_byte_is_dropped() {
        let genome = decode("AAGGC", ApiFormat::Raw);
        assert_eq!(genome.calls, vec!["AA", "GG"]);
    }

    #[test]
    fn test_trailing_newline_is_not_a_call() {
        assert_eq!(decode("AAGG\n", ApiFormat::Raw).calls, vec!["AA", "GG"]);
        assert_eq!(decode("AAG\r\n", ApiFormat::Raw).calls, vec!["AA"]);
    }

    #[test]
    fn test_empty_stream() {
        assert!(decode("", ApiFormat::Raw).calls.is_empty());
        assert!(decode("", ApiFormat::Auto).calls.is_empty());
    }

    #[test]
    fn test_json_genome() {
        let genome = decode(
            r#"{"id": "a42e94634e3f7683", "genome": "AACT__DI"}"#,
            ApiFormat::Json,
        );
        assert_eq!(genome.id.as_deref(), Some("a42e94634e3f7683"));
        assert_eq!(genome.calls, vec!["AA", "CT", "__", "DI"]);
    }

    #[test]
    fn test_json_odd_genome_is_rounded_down() {
        let genome = decode(r#"{"id": "x", "genome": "AAC"}"#, ApiFormat::Json);
        assert_eq!(genome.calls, vec!["AA"]);
    }

    #[test]
    fn test_auto_detects_json_and_raw() {
        let json = decode("\n  {\"id\": \"x\", \"genome\": \"GG\"}", ApiFormat::Auto);
        assert_eq!(json.id.as_deref(), Some("x"));
        assert_eq!(json.calls, vec!["GG"]);

        let raw = decode("GGTT", ApiFormat::Auto);
        assert!(raw.id.is_none());
        assert_eq!(raw.calls, vec!["GG", "TT"]);
    }

    #[test]
    fn test_invalid_json_by_mode() {
        let input = r#"{"id": "x", "genome": "#;

        let genome = parse_api_reader(input.as_bytes(), ApiFormat::Json, ParseMode::Tolerant)
            .unwrap();
        assert!(genome.calls.is_empty());

        let err =
            parse_api_reader(input.as_bytes(), ApiFormat::Json, ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_call_chunks_over_short_reads() {
        // A reader that hands out one byte per read must still produce whole pairs
        struct OneByte<'a>(&'a [u8]);
        impl Read for OneByte<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0.is_empty() || buf.is_empty() {
                    return Ok(0);
                }
                buf[0] = self.0[0];
                self.0 = &self.0[1..];
                Ok(1)
            }
        }

        let calls: Vec<String> = CallChunks::new(OneByte(b"AGCTT"))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(calls, vec!["AG", "CT"]);
    }
}
