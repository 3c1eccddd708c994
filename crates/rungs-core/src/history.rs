// crates/rungs-core/src/history.rs
//
// History ingestion: raw records (JSON array or JSON Lines) -> canonical
// oldest-first symbol sequence.
//
// `limit` keeps the most recent N records. Only kept records are encoded;
// errors still name the record's position in the input as delivered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::symbol::record::{encode_record, RawRecord};
use crate::symbol::Symbol;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

impl HistoryOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oldest-first" | "oldest" | "asc" => Some(HistoryOrder::OldestFirst),
            "newest-first" | "newest" | "desc" => Some(HistoryOrder::NewestFirst),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    /// Oldest first.
    pub symbols: Vec<Symbol>,
    /// Round label of the newest record, when the source carries one.
    pub latest_round: Option<String>,
}

/// Parse a JSON array of records, or one JSON record per non-empty line.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let t = text.trim_start();
    if t.starts_with('[') {
        return Ok(serde_json::from_str(t)?);
    }
    let mut out = Vec::new();
    for line in t.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push(serde_json::from_str(line)?);
    }
    Ok(out)
}

pub fn build_history(records: &[RawRecord], order: HistoryOrder, limit: Option<usize>) -> Result<History> {
    let n = records.len();
    let keep = limit.map_or(n, |l| l.min(n));

    // Input positions of the kept records, oldest first.
    let positions: Vec<usize> = match order {
        HistoryOrder::OldestFirst => (n - keep..n).collect(),
        HistoryOrder::NewestFirst => (0..keep).rev().collect(),
    };

    let symbols = positions
        .iter()
        .map(|&i| encode_record(i, &records[i]))
        .collect::<Result<Vec<Symbol>>>()?;

    let latest_round = positions.last().and_then(|&i| records[i].round_label());

    debug!(records = n, kept = symbols.len(), ?order, "history built");
    Ok(History {
        symbols,
        latest_round,
    })
}
