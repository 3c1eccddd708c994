// crates/rungs-core/src/symbol/record.rs
//
// Raw history record -> canonical Symbol.
//
// A record either carries the three attribute fields
//   start_point (LEFT/RIGHT), line_count (positive int), odd_even (ODD/EVEN)
// or a single `result` string in canonical or native form ("L3E", "좌3짝").
// Attribute fields win when both are present.
//
// Encoding is fail-fast: the first bad record rejects the whole batch so that
// symbol indices always line up with record indices.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RungsError};
use crate::symbol::{Parity, Side, Symbol};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "startPoint", skip_serializing_if = "Option::is_none")]
    pub start_point: Option<String>,

    #[serde(default, alias = "lineCount", skip_serializing_if = "Option::is_none")]
    pub line_count: Option<i64>,

    #[serde(default, alias = "oddEven", skip_serializing_if = "Option::is_none")]
    pub odd_even: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Round label of the draw (string or number in source data).
    #[serde(default, alias = "dateRound", skip_serializing_if = "Option::is_none")]
    pub date_round: Option<serde_json::Value>,
}

impl RawRecord {
    pub fn from_fields(start_point: &str, line_count: i64, odd_even: &str) -> Self {
        Self {
            start_point: Some(start_point.to_string()),
            line_count: Some(line_count),
            odd_even: Some(odd_even.to_string()),
            ..Self::default()
        }
    }

    pub fn from_result(result: &str) -> Self {
        Self {
            result: Some(result.to_string()),
            ..Self::default()
        }
    }

    pub fn round_label(&self) -> Option<String> {
        match self.date_round.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

pub fn encode_record(index: usize, r: &RawRecord) -> Result<Symbol> {
    let has_fields = r.start_point.is_some() || r.line_count.is_some() || r.odd_even.is_some();

    if !has_fields {
        let raw = r.result.as_deref().ok_or(RungsError::InvalidRecord {
            index,
            field: "result",
            value: "<missing>".into(),
        })?;
        return raw.parse().map_err(|_| RungsError::InvalidRecord {
            index,
            field: "result",
            value: raw.to_string(),
        });
    }

    let sp = r.start_point.as_deref().unwrap_or("<missing>");
    let side = Side::parse(sp).ok_or_else(|| RungsError::InvalidRecord {
        index,
        field: "start_point",
        value: sp.to_string(),
    })?;

    let line_count = match r.line_count {
        Some(n) if n > 0 && n <= u32::MAX as i64 => n as u32,
        Some(n) => {
            return Err(RungsError::InvalidRecord {
                index,
                field: "line_count",
                value: n.to_string(),
            })
        }
        None => {
            return Err(RungsError::InvalidRecord {
                index,
                field: "line_count",
                value: "<missing>".into(),
            })
        }
    };

    let oe = r.odd_even.as_deref().unwrap_or("<missing>");
    let parity = Parity::parse(oe).ok_or_else(|| RungsError::InvalidRecord {
        index,
        field: "odd_even",
        value: oe.to_string(),
    })?;

    Symbol::new(side, line_count, parity)
}

pub fn encode_records(records: &[RawRecord]) -> Result<Vec<Symbol>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| encode_record(i, r))
        .collect()
}
