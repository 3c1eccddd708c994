// crates/rungs-core/src/tally/rank.rs
//
// Deterministic ranking.
//   counts: (-count, canonical string)
//   scores: (-score via f64::total_cmp, canonical string)
// Never insertion order, never random choice among ties.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::symbol::Symbol;

pub type ScoreTable = BTreeMap<Symbol, f64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RankedCount {
    pub symbol: Symbol,
    pub count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RankedScore {
    pub symbol: Symbol,
    pub score: f64,
}

pub fn rank_counts<I: IntoIterator<Item = (Symbol, u64)>>(it: I) -> Vec<RankedCount> {
    let mut rows: Vec<(String, RankedCount)> = it
        .into_iter()
        .map(|(symbol, count)| (symbol.canonical(), RankedCount { symbol, count }))
        .collect();
    rows.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(&b.0)));
    rows.into_iter().map(|(_, r)| r).collect()
}

pub fn rank_scores(table: &ScoreTable) -> Vec<RankedScore> {
    let mut rows: Vec<(String, RankedScore)> = table
        .iter()
        .map(|(s, v)| {
            (
                s.canonical(),
                RankedScore {
                    symbol: *s,
                    score: *v,
                },
            )
        })
        .collect();
    rows.sort_by(|a, b| b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));
    rows.into_iter().map(|(_, r)| r).collect()
}

/// Scale a table into [-1, 1] by its largest absolute score. All-zero (or empty) => zeros.
pub fn normalize(table: &ScoreTable) -> ScoreTable {
    let max = table.values().fold(0.0f64, |m, v| m.max(v.abs()));
    if max == 0.0 || !max.is_finite() {
        return table.keys().map(|s| (*s, 0.0)).collect();
    }
    table.iter().map(|(s, v)| (*s, v / max)).collect()
}

/// Weighted sum of normalised tables, ranked.
pub fn combine(sources: &[(f64, &ScoreTable)]) -> Vec<RankedScore> {
    let mut acc: ScoreTable = BTreeMap::new();
    for (w, table) in sources {
        for (s, v) in normalize(table) {
            *acc.entry(s).or_insert(0.0) += w * v;
        }
    }
    rank_scores(&acc)
}
