// crates/rungs-core/src/scorer/periodic_lag.rs
//
// For each lag L and each i >= L with seq[i] == seq[i-L], +1 to seq[i].

use crate::scorer::{counts, recent, Scorer, ScorerName};
use crate::symbol::Symbol;
use crate::tally::ScoreTable;

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicLag {
    pub lags: Vec<usize>,
    pub window: Option<usize>,
}

impl Default for PeriodicLag {
    fn default() -> Self {
        Self {
            lags: vec![5, 13],
            window: None,
        }
    }
}

impl Scorer for PeriodicLag {
    fn name(&self) -> ScorerName {
        ScorerName::PeriodicLag
    }

    fn score(&self, seq: &[Symbol]) -> ScoreTable {
        let seq = recent(seq, self.window);
        let mut table: ScoreTable = counts(seq).into_keys().map(|s| (s, 0.0)).collect();

        for &lag in &self.lags {
            if lag == 0 {
                continue;
            }
            for i in lag..seq.len() {
                if seq[i] == seq[i - lag] {
                    *table.entry(seq[i]).or_insert(0.0) += 1.0;
                }
            }
        }
        table
    }
}
