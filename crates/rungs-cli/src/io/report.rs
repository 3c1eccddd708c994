// crates/rungs-cli/src/io/report.rs
//
// External shapes of a prediction: JSON (serde) and a fixed-width text view.

use std::fmt::Write as _;

use rungs_core::checksum::{blake3_16, hex16};
use rungs_core::engine::{BlockOutcome, BlockReport};
use rungs_core::tally::{RankedCount, RankedScore};
use rungs_core::Prediction;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub history_id: String,
    pub history_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_round: Option<String>,
    pub prediction: Prediction,
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// blake3_16 of the JSON rendering; equal inputs give equal ids.
    pub fn report_id(&self) -> anyhow::Result<String> {
        Ok(hex16(&blake3_16(self.to_json()?.as_bytes())))
    }

    pub fn to_text(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "--- predict ---");
        let _ = writeln!(s, "history_len     = {}", self.history_len);
        let _ = writeln!(s, "history_id      = {}", self.history_id);
        if let Some(r) = &self.latest_round {
            let _ = writeln!(s, "latest_round    = {r}");
        }

        for b in &self.prediction.blocks {
            let _ = writeln!(s, "--- block size={} ---", b.size);
            match &b.outcome {
                BlockOutcome::Insufficient { needed, available } => {
                    let _ = writeln!(
                        s,
                        "status          = insufficient (need {needed}, have {available})"
                    );
                }
                BlockOutcome::Ready(r) => block_text(&mut s, r),
            }
        }

        if !self.prediction.scorers.is_empty() {
            let _ = writeln!(s, "--- scorers ---");
            for o in &self.prediction.scorers {
                let top = o.top.map(|t| t.to_string()).unwrap_or_else(|| "-".into());
                let _ = writeln!(s, "{:<15} top={:<5} {}", o.name.as_str(), top, scores_text(&o.scores));
            }
        }

        if let Some(c) = &self.prediction.combined {
            let _ = writeln!(s, "--- combined ---");
            for (i, r) in c.iter().enumerate() {
                let _ = writeln!(s, "#{:>2} {:<5} score={:.4}", i + 1, r.symbol, r.score);
            }
        }
        s
    }
}

fn block_text(s: &mut String, r: &BlockReport) {
    let query: Vec<String> = r.query.iter().map(|q| q.to_string()).collect();
    let _ = writeln!(s, "query           = {}", query.join(" "));
    for t in &r.transforms {
        let _ = writeln!(
            s,
            "{:<15} matches={} total={} top: {}",
            t.transform.name(),
            t.matches,
            t.total,
            counts_text(&t.top)
        );
    }
    let _ = writeln!(s, "{:<15} total={} top: {}", "merged", r.merged.total(), counts_text(&r.merged_top));
    if let Some(i) = &r.intersection {
        let _ = writeln!(s, "{:<15} top: {}", "intersection", counts_text(i));
    }
}

fn counts_text(rows: &[RankedCount]) -> String {
    if rows.is_empty() {
        return "-".into();
    }
    rows.iter()
        .map(|r| format!("{}x{}", r.symbol, r.count))
        .collect::<Vec<_>>()
        .join(" ")
}

fn scores_text(rows: &[RankedScore]) -> String {
    rows.iter()
        .map(|r| format!("{}={:.3}", r.symbol, r.score))
        .collect::<Vec<_>>()
        .join(" ")
}
