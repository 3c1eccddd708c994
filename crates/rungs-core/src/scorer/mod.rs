// crates/rungs-core/src/scorer/mod.rs
//
// Heuristic scorers. Independent of window matching; each reads the canonical
// sequence (oldest first) and returns a score per distinct symbol it observed.
// All are pure: no shared state, no mutation of the input.

pub mod dedup;
pub mod periodic_lag;
pub mod volatility;

pub use dedup::Dedup;
pub use periodic_lag::PeriodicLag;
pub use volatility::Volatility;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RungsError};
use crate::symbol::Symbol;
use crate::tally::{rank_scores, RankedScore, ScoreTable};

/// Names usable as combination weights. `BlockMatch` is the merged window-match
/// frequency table, the others are the scorers below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerName {
    BlockMatch,
    PeriodicLag,
    Dedup,
    Volatility,
}

impl ScorerName {
    pub const SCORERS: [ScorerName; 3] = [
        ScorerName::PeriodicLag,
        ScorerName::Dedup,
        ScorerName::Volatility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScorerName::BlockMatch => "block-match",
            ScorerName::PeriodicLag => "periodic-lag",
            ScorerName::Dedup => "dedup",
            ScorerName::Volatility => "volatility",
        }
    }
}

impl fmt::Display for ScorerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerName {
    type Err = RungsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block-match" | "block" => Ok(ScorerName::BlockMatch),
            "periodic-lag" | "lag" => Ok(ScorerName::PeriodicLag),
            "dedup" | "recency" => Ok(ScorerName::Dedup),
            "volatility" | "flip" => Ok(ScorerName::Volatility),
            _ => Err(RungsError::UnknownScorer(s.to_string())),
        }
    }
}

pub trait Scorer {
    fn name(&self) -> ScorerName;

    fn score(&self, seq: &[Symbol]) -> ScoreTable;

    fn top_choice(&self, seq: &[Symbol]) -> Option<Symbol> {
        rank_scores(&self.score(seq)).first().map(|r| r.symbol)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScorerOutput {
    pub name: ScorerName,
    pub top: Option<Symbol>,
    pub scores: Vec<RankedScore>,
    #[serde(skip)]
    pub table: ScoreTable,
}

pub fn run_scorer(scorer: &dyn Scorer, seq: &[Symbol]) -> ScorerOutput {
    let table = scorer.score(seq);
    let scores = rank_scores(&table);
    ScorerOutput {
        name: scorer.name(),
        top: scores.first().map(|r| r.symbol),
        scores,
        table,
    }
}

/// The most recent `window` symbols (all of them when `window` is None or larger).
pub fn recent(seq: &[Symbol], window: Option<usize>) -> &[Symbol] {
    match window {
        Some(n) if n < seq.len() => &seq[seq.len() - n..],
        _ => seq,
    }
}

pub(crate) fn counts(seq: &[Symbol]) -> BTreeMap<Symbol, u64> {
    let mut m = BTreeMap::new();
    for s in seq {
        *m.entry(*s).or_insert(0u64) += 1;
    }
    m
}
