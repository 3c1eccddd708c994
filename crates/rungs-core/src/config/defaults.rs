// crates/rungs-core/src/config/defaults.rs

use std::collections::BTreeMap;

use crate::config::{
    DedupConfig, EngineConfig, HistoryConfig, PeriodicLagConfig, ScorersConfig, VolatilityConfig,
};
use crate::engine::IntersectionMode;
use crate::history::HistoryOrder;
use crate::scorer::ScorerName;
use crate::transform::TransformKind;

/// How many of the newest records a prediction reads by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 3000;

pub fn default_config() -> EngineConfig {
    // Window sizes 3 and 4 with the four forward transforms is the layout the
    // ladder service has always reported ("3-line" and "4-line" blocks).
    EngineConfig {
        window_sizes: vec![3, 4],
        transforms: TransformKind::ALL.iter().map(|k| k.name().to_string()).collect(),
        include_reversed: false,
        top_k: 3,
        overlap_resolution: false,
        intersection: IntersectionMode::None,

        history: HistoryConfig {
            order: HistoryOrder::OldestFirst,
            limit: Some(DEFAULT_HISTORY_LIMIT),
        },

        scorers: ScorersConfig {
            enabled: ScorerName::SCORERS.iter().map(|s| s.as_str().to_string()).collect(),
            periodic_lag: PeriodicLagConfig {
                lags: vec![5, 13],
                window: None,
            },
            dedup: DedupConfig {
                window: 30,
                gamma: 2.0,
                streak: 5,
            },
            volatility: VolatilityConfig {
                window: 10,
                threshold: 0.5,
            },
            weights: BTreeMap::new(),
        },
    }
}
