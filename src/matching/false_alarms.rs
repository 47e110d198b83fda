use std::collections::HashSet;

use crate::core::types::CallPair;

/// (API call | raw-data call) pairs that differ only in notation.
///
/// The raw-data download abbreviates some homozygous calls to a single letter,
/// and leaves no-calls empty where the API writes `--` or `__`.
pub const STANDARD_FALSE_ALARMS: [(&str, &str); 8] = [
    ("AA", "A"),
    ("CC", "C"),
    ("GG", "G"),
    ("TT", "T"),
    ("DD", "D"),
    ("II", "I"),
    ("__", ""),
    ("--", ""),
];

/// Call pairs that must not be reported as mismatches even though the calls differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FalseAlarms {
    pairs: HashSet<CallPair>,
}

impl Default for FalseAlarms {
    /// The standard table, see [`STANDARD_FALSE_ALARMS`]
    fn default() -> Self {
        STANDARD_FALSE_ALARMS
            .iter()
            .map(|(api, raw)| CallPair::new(*api, *raw))
            .collect()
    }
}

impl FalseAlarms {
    /// An empty table: every difference is a mismatch
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pairs: HashSet::new(),
        }
    }

    /// Add a pair. Returns false if it was already present.
    pub fn insert(&mut self, pair: CallPair) -> bool {
        self.pairs.insert(pair)
    }

    #[must_use]
    pub fn contains(&self, pair: &CallPair) -> bool {
        self.pairs.contains(pair)
    }

    #[must_use]
    pub fn is_false_alarm(&self, api_call: &str, raw_data_call: &str) -> bool {
        !self.pairs.is_empty() && self.contains(&CallPair::new(api_call, raw_data_call))
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CallPair> {
        self.pairs.iter()
    }
}

impl FromIterator<CallPair> for FalseAlarms {
    fn from_iter<I: IntoIterator<Item = CallPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl Extend<CallPair> for FalseAlarms {
    fn extend<I: IntoIterator<Item = CallPair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}
