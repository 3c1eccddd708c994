// crates/rungs-core/src/engine.rs
//
// Parameterised prediction engine over an immutable history snapshot.
//
// predict(seq):
//   1. per window size: scan every transform (largest size first so overlap
//      resolution, when enabled, lets bigger windows claim ranges first)
//   2. per size: per-transform tables + top-K, merged table + top-K,
//      optional intersection table
//   3. scorers over the same sequence
//   4. weighted combination when weights are configured
//
// The engine holds only validated parameters; predict() takes &self and
// allocates everything it returns.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::scan::{find_matches, query_window, Match, OverlapResolver};
use crate::scorer::{run_scorer, Dedup, PeriodicLag, Scorer, ScorerName, ScorerOutput, Volatility};
use crate::symbol::Symbol;
use crate::tally::{combine, FrequencyTable, RankedCount, RankedScore, ScoreTable};
use crate::transform::{CandidateSide, Transform, TransformRegistry};
use crate::validate::validate_params;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntersectionMode {
    #[default]
    None,
    /// Non-zero under every requested transform.
    AllTransforms,
    /// Non-zero in both the merged forward family and the merged reversed family.
    ForwardVsReversed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineParams {
    pub window_sizes: Vec<usize>,
    pub transforms: TransformRegistry,
    pub top_k: usize,
    pub overlap_resolution: bool,
    pub intersection: IntersectionMode,
    pub scorers: Vec<ScorerName>,
    pub periodic_lag: PeriodicLag,
    pub dedup: Dedup,
    pub volatility: Volatility,
    /// Empty => no combined ranking.
    pub weights: BTreeMap<ScorerName, f64>,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            window_sizes: vec![3, 4],
            transforms: TransformRegistry::standard(),
            top_k: 3,
            overlap_resolution: false,
            intersection: IntersectionMode::None,
            scorers: ScorerName::SCORERS.to_vec(),
            periodic_lag: PeriodicLag::default(),
            dedup: Dedup::default(),
            volatility: Volatility::default(),
            weights: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformReport {
    pub transform: Transform,
    pub candidate_side: CandidateSide,
    pub matches: usize,
    pub total: u64,
    pub counts: FrequencyTable,
    pub top: Vec<RankedCount>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockReport {
    pub query: Vec<Symbol>,
    pub transforms: Vec<TransformReport>,
    pub merged: FrequencyTable,
    pub merged_top: Vec<RankedCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersection: Option<Vec<RankedCount>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum BlockOutcome {
    /// Fewer than size + 1 symbols; nothing was scanned.
    Insufficient { needed: usize, available: usize },
    Ready(BlockReport),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockPrediction {
    pub size: usize,
    pub outcome: BlockOutcome,
}

impl BlockPrediction {
    pub fn report(&self) -> Option<&BlockReport> {
        match &self.outcome {
            BlockOutcome::Ready(r) => Some(r),
            BlockOutcome::Insufficient { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self.outcome, BlockOutcome::Insufficient { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub history_len: usize,
    pub blocks: Vec<BlockPrediction>,
    pub scorers: Vec<ScorerOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined: Option<Vec<RankedScore>>,
}

impl Prediction {
    pub fn block(&self, size: usize) -> Option<&BlockPrediction> {
        self.blocks.iter().find(|b| b.size == size)
    }

    pub fn scorer(&self, name: ScorerName) -> Option<&ScorerOutput> {
        self.scorers.iter().find(|s| s.name == name)
    }
}

pub struct Engine {
    pub params: EngineParams,
}

impl Engine {
    pub fn new(params: EngineParams) -> Result<Self> {
        validate_params(&params)?;
        Ok(Self { params })
    }

    /// Matches per window size, after overlap resolution when enabled.
    /// Sizes with too little history are absent.
    pub fn scan(&self, seq: &[Symbol]) -> HashMap<usize, Vec<Match>> {
        let mut sizes = self.params.window_sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let mut resolver = OverlapResolver::new();
        let mut out = HashMap::new();

        for size in sizes {
            if query_window(seq, size).is_none() {
                continue;
            }
            let mut batch: Vec<Match> = self
                .params
                .transforms
                .iter()
                .flat_map(|t| find_matches(seq, size, t))
                .collect();

            if self.params.overlap_resolution {
                let before = batch.len();
                batch = resolver.admit(batch);
                debug!(size, before, after = batch.len(), "overlap resolution");
            }
            out.insert(size, batch);
        }
        out
    }

    pub fn predict(&self, seq: &[Symbol]) -> Prediction {
        let mut scans = self.scan(seq);

        let blocks: Vec<BlockPrediction> = self
            .params
            .window_sizes
            .iter()
            .map(|&size| {
                let outcome = match (query_window(seq, size), scans.remove(&size)) {
                    (Some(query), Some(matches)) => {
                        BlockOutcome::Ready(self.block_report(seq, query, &matches))
                    }
                    _ => BlockOutcome::Insufficient {
                        needed: size + 1,
                        available: seq.len(),
                    },
                };
                BlockPrediction { size, outcome }
            })
            .collect();

        let scorers: Vec<ScorerOutput> = self
            .params
            .scorers
            .iter()
            .filter_map(|name| self.scorer(*name))
            .map(|s| run_scorer(s, seq))
            .collect();

        let combined = if self.params.weights.is_empty() {
            None
        } else {
            Some(self.combine(&blocks, &scorers))
        };

        Prediction {
            history_len: seq.len(),
            blocks,
            scorers,
            combined,
        }
    }

    fn scorer(&self, name: ScorerName) -> Option<&dyn Scorer> {
        match name {
            ScorerName::PeriodicLag => Some(&self.params.periodic_lag),
            ScorerName::Dedup => Some(&self.params.dedup),
            ScorerName::Volatility => Some(&self.params.volatility),
            ScorerName::BlockMatch => None,
        }
    }

    fn block_report(&self, seq: &[Symbol], query: &[Symbol], matches: &[Match]) -> BlockReport {
        let k = self.params.top_k;

        let transforms: Vec<TransformReport> = self
            .params
            .transforms
            .iter()
            .map(|t| {
                let own: Vec<&Match> = matches.iter().filter(|m| m.transform == t).collect();
                let counts = FrequencyTable::from_matches(seq, own.iter().copied());
                TransformReport {
                    transform: t,
                    candidate_side: t.candidate_side(),
                    matches: own.len(),
                    total: counts.total(),
                    top: counts.top_k(k),
                    counts,
                }
            })
            .collect();

        let merged = FrequencyTable::merged(transforms.iter().map(|r| &r.counts));
        let merged_top = merged.top_k(k);

        let intersection = match self.params.intersection {
            IntersectionMode::None => None,
            IntersectionMode::AllTransforms => {
                let tables: Vec<&FrequencyTable> = transforms.iter().map(|r| &r.counts).collect();
                Some(FrequencyTable::intersection(&tables).top_k(k))
            }
            IntersectionMode::ForwardVsReversed => {
                let family = |rev: bool| {
                    FrequencyTable::merged(
                        transforms
                            .iter()
                            .filter(|r| r.transform.is_reversed() == rev)
                            .map(|r| &r.counts),
                    )
                };
                let (fwd, rev) = (family(false), family(true));
                Some(FrequencyTable::intersection(&[&fwd, &rev]).top_k(k))
            }
        };

        BlockReport {
            query: query.to_vec(),
            transforms,
            merged,
            merged_top,
            intersection,
        }
    }

    fn combine(&self, blocks: &[BlockPrediction], scorers: &[ScorerOutput]) -> Vec<RankedScore> {
        let block_table: ScoreTable =
            FrequencyTable::merged(blocks.iter().filter_map(|b| b.report()).map(|r| &r.merged))
                .to_scores();

        let mut sources: Vec<(f64, &ScoreTable)> = Vec::new();
        for (name, w) in &self.params.weights {
            let table = match name {
                ScorerName::BlockMatch => &block_table,
                other => match scorers.iter().find(|s| s.name == *other) {
                    Some(s) => &s.table,
                    None => continue,
                },
            };
            sources.push((*w, table));
        }
        combine(&sources)
    }
}
