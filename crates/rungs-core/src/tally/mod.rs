// crates/rungs-core/src/tally/mod.rs

pub mod frequency;
pub mod rank;

pub use frequency::FrequencyTable;
pub use rank::{combine, rank_counts, rank_scores, RankedCount, RankedScore, ScoreTable};
