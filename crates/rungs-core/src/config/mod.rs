// crates/rungs-core/src/config/mod.rs
//
// Engine configuration with layered resolution (highest priority first):
//   1. CLI flags (applied by the caller on the resolved config)
//   2. RUNGS_* environment variables
//   3. config file (`--config PATH`, else ./rungs.toml when present)
//   4. compiled defaults (defaults.rs)
//
// Unknown TOML keys are ignored. The resolved config is turned into
// validated EngineParams by `to_params`.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{EngineParams, IntersectionMode};
use crate::error::{Result, RungsError};
use crate::history::HistoryOrder;
use crate::scorer::{Dedup, PeriodicLag, ScorerName, Volatility};
use crate::transform::TransformRegistry;
use crate::validate::validate_params;

pub const CONFIG_FILE: &str = "rungs.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window_sizes: Vec<usize>,
    pub transforms: Vec<String>,
    /// Also scan the reversed counterpart of every listed transform.
    pub include_reversed: bool,
    pub top_k: usize,
    pub overlap_resolution: bool,
    pub intersection: IntersectionMode,
    pub history: HistoryConfig,
    pub scorers: ScorersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub order: HistoryOrder,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorersConfig {
    pub enabled: Vec<String>,
    pub periodic_lag: PeriodicLagConfig,
    pub dedup: DedupConfig,
    pub volatility: VolatilityConfig,
    /// Scorer name -> weight. Empty disables the combined ranking.
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicLagConfig {
    pub lags: Vec<usize>,
    pub window: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub window: usize,
    pub gamma: f64,
    pub streak: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    pub window: usize,
    pub threshold: f64,
}

// Partial TOML tables fall back field-by-field to the compiled defaults.
impl Default for EngineConfig {
    fn default() -> Self {
        defaults::default_config()
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        defaults::default_config().history
    }
}

impl Default for ScorersConfig {
    fn default() -> Self {
        defaults::default_config().scorers
    }
}

impl Default for PeriodicLagConfig {
    fn default() -> Self {
        defaults::default_config().scorers.periodic_lag
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        defaults::default_config().scorers.dedup
    }
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        defaults::default_config().scorers.volatility
    }
}

impl EngineConfig {
    /// Parse a TOML document on top of the compiled defaults.
    pub fn from_toml(s: &str) -> Result<Self> {
        Self::parse_toml(s, "<string>")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RungsError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_toml(&text, &path.display().to_string())
    }

    fn parse_toml(s: &str, origin: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(s).map_err(|e| RungsError::Config {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        // limit = 0 means "no limit", same as RUNGS_LIMIT=0 and --limit 0.
        if config.history.limit == Some(0) {
            config.history.limit = None;
        }
        Ok(config)
    }

    /// Defaults -> file -> environment. An explicit path must exist; the
    /// implicit ./rungs.toml is only read when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(p) => Self::from_file(p)?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        config.apply_env_with(|k| std::env::var(k).ok())?;
        debug!(?config, "config resolved");
        Ok(config)
    }

    /// Apply RUNGS_* overrides read through `get` (std::env::var in production).
    pub fn apply_env_with<F>(&mut self, get: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get("RUNGS_WINDOW_SIZES") {
            self.window_sizes = parse_list(&v, "RUNGS_WINDOW_SIZES")?;
        }
        if let Some(v) = get("RUNGS_TRANSFORMS") {
            self.transforms = split_list(&v);
        }
        if let Some(v) = get("RUNGS_TOP_K") {
            self.top_k = parse_one(&v, "RUNGS_TOP_K")?;
        }
        if let Some(v) = get("RUNGS_OVERLAP") {
            self.overlap_resolution = parse_bool(&v, "RUNGS_OVERLAP")?;
        }
        if let Some(v) = get("RUNGS_LIMIT") {
            let n: usize = parse_one(&v, "RUNGS_LIMIT")?;
            self.history.limit = (n != 0).then_some(n);
        }
        if let Some(v) = get("RUNGS_ORDER") {
            self.history.order = HistoryOrder::parse(&v).ok_or_else(|| env_error("RUNGS_ORDER", &v))?;
        }
        Ok(())
    }

    pub fn to_params(&self) -> Result<EngineParams> {
        let mut transforms = TransformRegistry::select(&self.transforms)?;
        if self.include_reversed {
            transforms = transforms.with_reversed();
        }

        let scorers = self
            .scorers
            .enabled
            .iter()
            .map(|s| s.parse::<ScorerName>())
            .collect::<Result<Vec<_>>>()?;

        let mut weights = BTreeMap::new();
        for (name, w) in &self.scorers.weights {
            weights.insert(name.parse::<ScorerName>()?, *w);
        }

        let params = EngineParams {
            window_sizes: self.window_sizes.clone(),
            transforms,
            top_k: self.top_k,
            overlap_resolution: self.overlap_resolution,
            intersection: self.intersection,
            scorers,
            periodic_lag: PeriodicLag {
                lags: self.scorers.periodic_lag.lags.clone(),
                window: self.scorers.periodic_lag.window,
            },
            dedup: Dedup {
                window: self.scorers.dedup.window,
                gamma: self.scorers.dedup.gamma,
                streak: self.scorers.dedup.streak,
            },
            volatility: Volatility {
                window: self.scorers.volatility.window,
                threshold: self.scorers.volatility.threshold,
            },
            weights,
        };
        validate_params(&params)?;
        Ok(params)
    }
}

fn env_error(key: &str, value: &str) -> RungsError {
    RungsError::Config {
        path: format!("env:{key}"),
        message: format!("cannot parse {value:?}"),
    }
}

fn split_list(v: &str) -> Vec<String> {
    v.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_one<T: std::str::FromStr>(v: &str, key: &str) -> Result<T> {
    v.trim().parse().map_err(|_| env_error(key, v))
}

fn parse_list<T: std::str::FromStr>(v: &str, key: &str) -> Result<Vec<T>> {
    split_list(v).iter().map(|t| parse_one(t, key)).collect()
}

fn parse_bool(v: &str, key: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(env_error(key, v)),
    }
}
