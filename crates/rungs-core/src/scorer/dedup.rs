// crates/rungs-core/src/scorer/dedup.rs
//
// Recency de-duplication bias over the last `window` symbols:
//   p     = count / window_len
//   score = 1 - p^gamma        (gamma > 1)
// Over-represented symbols score low, rare ones high.
//
// Streak guard: when the last `streak` positions all hold one symbol, that
// symbol's score is forced to 0.0 (the floor of the score range).

use crate::scorer::{counts, recent, Scorer, ScorerName};
use crate::symbol::Symbol;
use crate::tally::ScoreTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Dedup {
    pub window: usize,
    pub gamma: f64,
    pub streak: usize,
}

impl Default for Dedup {
    fn default() -> Self {
        Self {
            window: 30,
            gamma: 2.0,
            streak: 5,
        }
    }
}

impl Dedup {
    /// The symbol filling the last `streak` positions, if any.
    pub fn streak_symbol(&self, seq: &[Symbol]) -> Option<Symbol> {
        if self.streak == 0 || seq.len() < self.streak {
            return None;
        }
        let tail = &seq[seq.len() - self.streak..];
        let first = tail[0];
        tail.iter().all(|s| *s == first).then_some(first)
    }
}

impl Scorer for Dedup {
    fn name(&self) -> ScorerName {
        ScorerName::Dedup
    }

    fn score(&self, seq: &[Symbol]) -> ScoreTable {
        let window = recent(seq, Some(self.window));
        let total = window.len() as f64;

        let mut table: ScoreTable = counts(window)
            .into_iter()
            .map(|(s, c)| {
                let score = if total == 0.0 {
                    0.0
                } else {
                    1.0 - (c as f64 / total).powf(self.gamma)
                };
                (s, score)
            })
            .collect();

        if let Some(s) = self.streak_symbol(seq) {
            table.insert(s, 0.0);
        }
        table
    }
}
