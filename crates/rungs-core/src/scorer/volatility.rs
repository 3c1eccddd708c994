// crates/rungs-core/src/scorer/volatility.rs
//
// Change rate r = unequal adjacent pairs / (window_len - 1) over the recent window.
//   r <  threshold  (calm, expect a reversal)  -> favour the least frequent: 1 - share
//   r >= threshold  (choppy, expect more of the same) -> favour the most frequent: share

use crate::scorer::{counts, recent, Scorer, ScorerName};
use crate::symbol::Symbol;
use crate::tally::ScoreTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Volatility {
    pub window: usize,
    pub threshold: f64,
}

impl Default for Volatility {
    fn default() -> Self {
        Self {
            window: 10,
            threshold: 0.5,
        }
    }
}

impl Volatility {
    pub fn change_rate(&self, seq: &[Symbol]) -> f64 {
        let w = recent(seq, Some(self.window));
        if w.len() < 2 {
            return 0.0;
        }
        let changes = w.windows(2).filter(|p| p[0] != p[1]).count();
        changes as f64 / (w.len() - 1) as f64
    }

    pub fn is_calm(&self, seq: &[Symbol]) -> bool {
        self.change_rate(seq) < self.threshold
    }
}

impl Scorer for Volatility {
    fn name(&self) -> ScorerName {
        ScorerName::Volatility
    }

    fn score(&self, seq: &[Symbol]) -> ScoreTable {
        let w = recent(seq, Some(self.window));
        let total = w.len() as f64;
        let calm = self.is_calm(seq);

        counts(w)
            .into_iter()
            .map(|(s, c)| {
                let share = if total == 0.0 { 0.0 } else { c as f64 / total };
                (s, if calm { 1.0 - share } else { share })
            })
            .collect()
    }
}
