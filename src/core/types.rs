use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A SNP identifier such as `rs12345`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snp(pub String);

impl Snp {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Snp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An API call correlated with the raw-data call observed for the same SNP.
///
/// Written as `API|RAW`, e.g. `AA|A` or `--|` when the raw-data call is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallPair {
    pub api_call: String,
    pub raw_data_call: String,
}

impl CallPair {
    pub fn new(api_call: impl Into<String>, raw_data_call: impl Into<String>) -> Self {
        Self {
            api_call: api_call.into(),
            raw_data_call: raw_data_call.into(),
        }
    }
}

impl std::fmt::Display for CallPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.api_call, self.raw_data_call)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid call pair '{0}': expected API|RAW, e.g. AA|A")]
pub struct CallPairParseError(String);

impl FromStr for CallPair {
    type Err = CallPairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (api, raw) = s
            .split_once('|')
            .ok_or_else(|| CallPairParseError(s.to_string()))?;

        // Calls are at most two characters; a second '|' is never part of one
        if api.is_empty() || api.chars().count() > 2 || raw.chars().count() > 2 || raw.contains('|')
        {
            return Err(CallPairParseError(s.to_string()));
        }

        Ok(Self::new(api, raw))
    }
}

/// One category of disagreement and the SNPs that exhibit it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    #[serde(flatten)]
    pub pair: CallPair,

    /// Contributing SNPs, in API stream order
    pub snps: Vec<Snp>,
}

impl Mismatch {
    #[must_use]
    pub fn count(&self) -> usize {
        self.snps.len()
    }
}
