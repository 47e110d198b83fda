use std::collections::HashMap;

use tracing::debug;

use crate::core::types::{CallPair, Mismatch, Snp};
use crate::matching::false_alarms::FalseAlarms;
use crate::parsing::key::SnpIndex;
use crate::parsing::raw_data::RawGenotypes;

/// Outcome of comparing every API position against the raw data
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    /// Positions whose calls agree, including suppressed false alarms
    pub matches: usize,

    /// Positions whose calls disagree
    pub mismatches: usize,

    /// SNPs grouped by the call pair they disagree on, in stream order
    pub by_pair: HashMap<CallPair, Vec<Snp>>,
}

impl Comparison {
    #[must_use]
    pub fn total(&self) -> usize {
        self.matches + self.mismatches
    }

    /// Percentage of compared positions that matched, 0.0 if nothing was compared
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Counts are far below 2^52
    pub fn match_percentage(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.matches as f64 / self.total() as f64 * 100.0
    }

    /// Mismatch categories ordered by descending count.
    ///
    /// Ties are ordered by API call, then raw-data call.
    #[must_use]
    pub fn sorted_mismatches(&self) -> Vec<Mismatch> {
        let mut mismatches: Vec<Mismatch> = self
            .by_pair
            .iter()
            .map(|(pair, snps)| Mismatch {
                pair: pair.clone(),
                snps: snps.clone(),
            })
            .collect();

        mismatches.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.pair.cmp(&b.pair)));
        mismatches
    }
}

/// Compares decoded API calls against raw-data calls through the key index
pub struct Comparator<'a> {
    index: &'a SnpIndex,
    raw: &'a RawGenotypes,
    false_alarms: &'a FalseAlarms,
}

impl<'a> Comparator<'a> {
    #[must_use]
    pub fn new(index: &'a SnpIndex, raw: &'a RawGenotypes, false_alarms: &'a FalseAlarms) -> Self {
        Self {
            index,
            raw,
            false_alarms,
        }
    }

    /// Classify each call; the call at position `i` belongs to key index `i`
    pub fn compare<I, S>(&self, calls: I) -> Comparison
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut comparison = Comparison::default();
        let mut suppressed = 0usize;

        for (position, api_call) in calls.into_iter().enumerate() {
            let api_call = api_call.as_ref();
            let snp = self.index.snp(position);
            let raw_data_call = self.raw.call(snp);

            if api_call == raw_data_call {
                comparison.matches += 1;
            } else if self.false_alarms.is_false_alarm(api_call, raw_data_call) {
                suppressed += 1;
                comparison.matches += 1;
            } else {
                comparison.mismatches += 1;
                comparison
                    .by_pair
                    .entry(CallPair::new(api_call, raw_data_call))
                    .or_default()
                    .push(Snp::new(snp));
            }
        }

        debug!(
            "Compared {} positions: {} matches ({suppressed} false alarms), {} mismatches in {} categories",
            comparison.total(),
            comparison.matches,
            comparison.mismatches,
            comparison.by_pair.len()
        );

        comparison
    }
}
