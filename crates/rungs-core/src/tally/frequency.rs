// crates/rungs-core/src/tally/frequency.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scan::Match;
use crate::symbol::Symbol;
use crate::tally::rank::{rank_counts, RankedCount, ScoreTable};

/// Candidate -> count. Zero counts are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the candidate adjacent to each match. Out-of-range candidates are skipped.
    pub fn from_matches<'a, I>(seq: &[Symbol], matches: I) -> Self
    where
        I: IntoIterator<Item = &'a Match>,
    {
        let mut t = Self::new();
        for m in matches {
            if let Some(c) = m.candidate(seq) {
                t.add(c);
            }
        }
        t
    }

    #[inline]
    pub fn add(&mut self, s: Symbol) {
        self.add_n(s, 1);
    }

    pub fn add_n(&mut self, s: Symbol, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(s).or_insert(0) += n;
    }

    pub fn get(&self, s: &Symbol) -> u64 {
        self.counts.get(s).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(s, c)| (*s, *c))
    }

    pub fn merge(&mut self, other: &FrequencyTable) {
        for (s, c) in other.iter() {
            self.add_n(s, c);
        }
    }

    /// Sum of all given tables.
    pub fn merged<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a FrequencyTable>,
    {
        let mut out = Self::new();
        for t in tables {
            out.merge(t);
        }
        out
    }

    /// Candidates with a non-zero count in every table, counts summed.
    /// No tables => empty.
    pub fn intersection(tables: &[&FrequencyTable]) -> Self {
        let Some((first, rest)) = tables.split_first() else {
            return Self::new();
        };
        let mut out = Self::new();
        for (s, c) in first.iter() {
            if rest.iter().all(|t| t.get(&s) > 0) {
                let sum = c + rest.iter().map(|t| t.get(&s)).sum::<u64>();
                out.add_n(s, sum);
            }
        }
        out
    }

    pub fn ranked(&self) -> Vec<RankedCount> {
        rank_counts(self.iter())
    }

    pub fn top_k(&self, k: usize) -> Vec<RankedCount> {
        let mut r = self.ranked();
        r.truncate(k);
        r
    }

    pub fn to_scores(&self) -> ScoreTable {
        self.iter().map(|(s, c)| (s, c as f64)).collect()
    }
}
