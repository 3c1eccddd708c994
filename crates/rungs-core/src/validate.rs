// crates/rungs-core/src/validate.rs

use crate::engine::{EngineParams, IntersectionMode};
use crate::error::{Result, RungsError};
use crate::scorer::ScorerName;

pub fn validate_params(p: &EngineParams) -> Result<()> {
    if p.window_sizes.is_empty() {
        return Err(RungsError::Validation("window_sizes must not be empty".into()));
    }
    if p.window_sizes.contains(&0) {
        return Err(RungsError::Validation("window sizes must be > 0".into()));
    }
    let mut sizes = p.window_sizes.clone();
    sizes.sort_unstable();
    sizes.dedup();
    if sizes.len() != p.window_sizes.len() {
        return Err(RungsError::Validation("window_sizes must be distinct".into()));
    }

    if p.transforms.is_empty() {
        return Err(RungsError::Validation("at least one transform is required".into()));
    }
    if p.intersection == IntersectionMode::ForwardVsReversed {
        let reversed = p.transforms.iter().filter(|t| t.is_reversed()).count();
        if reversed == 0 || reversed == p.transforms.len() {
            return Err(RungsError::Validation(
                "forward-vs-reversed intersection needs both forward and reversed transforms".into(),
            ));
        }
    }
    if p.top_k == 0 {
        return Err(RungsError::Validation("top_k must be > 0".into()));
    }

    // Scorers
    if p.scorers.contains(&ScorerName::BlockMatch) {
        return Err(RungsError::Validation(
            "block-match is a weight source, not a scorer".into(),
        ));
    }
    let mut names = p.scorers.clone();
    names.sort_unstable();
    names.dedup();
    if names.len() != p.scorers.len() {
        return Err(RungsError::Validation("scorers must be distinct".into()));
    }
    if p.periodic_lag.lags.is_empty() || p.periodic_lag.lags.contains(&0) {
        return Err(RungsError::Validation("periodic-lag lags must be non-empty and > 0".into()));
    }
    if p.periodic_lag.window == Some(0) {
        return Err(RungsError::Validation("periodic-lag window must be > 0".into()));
    }
    if p.dedup.window == 0 {
        return Err(RungsError::Validation("dedup window must be > 0".into()));
    }
    // gamma <= 1 would stop penalising over-represented symbols.
    if !(p.dedup.gamma > 1.0 && p.dedup.gamma.is_finite()) {
        return Err(RungsError::Validation("dedup gamma must be finite and > 1".into()));
    }
    if p.volatility.window < 2 {
        return Err(RungsError::Validation("volatility window must be >= 2".into()));
    }
    if !(0.0..=1.0).contains(&p.volatility.threshold) {
        return Err(RungsError::Validation(
            "volatility threshold must be within [0, 1]".into(),
        ));
    }

    // Weights
    for (name, w) in &p.weights {
        if !w.is_finite() {
            return Err(RungsError::Validation(format!("weight for {name} must be finite")));
        }
        if *name != ScorerName::BlockMatch && !p.scorers.contains(name) {
            return Err(RungsError::Validation(format!(
                "weight given for {name}, which is not enabled"
            )));
        }
    }

    Ok(())
}
