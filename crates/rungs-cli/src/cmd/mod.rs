// crates/rungs-cli/src/cmd/mod.rs

pub mod encode;
pub mod predict;
pub mod scan;
pub mod transforms;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use rungs_core::EngineConfig;

/// Where the history comes from and how it is ordered.
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// History file: JSON array or JSON Lines of records
    #[arg(long)]
    pub history: String,

    /// Record order in the file: oldest-first | newest-first (default from config)
    #[arg(long)]
    pub order: Option<String>,

    /// Keep only the newest N records (0 = all; default from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Layered engine config: defaults, then `path` (or ./rungs.toml), then RUNGS_* env.
pub fn load_config(path: Option<&str>) -> anyhow::Result<EngineConfig> {
    EngineConfig::load(path.map(Path::new))
        .with_context(|| format!("load config {}", path.unwrap_or("(default)")))
}
