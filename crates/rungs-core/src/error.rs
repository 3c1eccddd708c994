// crates/rungs-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RungsError>;

#[derive(Debug, Error)]
pub enum RungsError {
    /// A history record carries a field outside its enumeration.
    /// `index` is the record's position in the input as delivered.
    #[error("invalid record #{index}: field `{field}` = {value:?}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    #[error("unknown scorer: {0}")]
    UnknownScorer(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error ({path}): {message}")]
    Config { path: String, message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
