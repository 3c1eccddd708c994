// crates/rungs-cli/src/io/history_file.rs

use anyhow::{Context, Result};
use rungs_core::history::{build_history, parse_records, History, HistoryOrder};
use rungs_core::EngineConfig;
use tracing::info;

use crate::cmd::HistoryArgs;

/// Read + encode a history file. Flags override the config's order/limit.
pub fn load(args: &HistoryArgs, config: &EngineConfig) -> Result<History> {
    let order = match args.order.as_deref() {
        Some(s) => HistoryOrder::parse(s)
            .with_context(|| format!("unknown order {s:?} (oldest-first | newest-first)"))?,
        None => config.history.order,
    };
    let limit = match args.limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.history.limit,
    };

    let text = std::fs::read_to_string(&args.history)
        .with_context(|| format!("read history {}", args.history))?;
    let records = parse_records(&text).with_context(|| format!("parse history {}", args.history))?;
    let history = build_history(&records, order, limit)
        .with_context(|| format!("encode history {}", args.history))?;

    info!(
        path = %args.history,
        records = records.len(),
        symbols = history.symbols.len(),
        ?order,
        ?limit,
        "history loaded"
    );
    Ok(history)
}
