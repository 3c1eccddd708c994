pub mod error;
pub mod validate;

pub mod checksum;
pub mod config;
pub mod engine;
pub mod history;
pub mod scan;
pub mod scorer;
pub mod symbol;
pub mod tally;
pub mod transform;

pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, EngineParams, Prediction};
pub use crate::error::{Result, RungsError};
pub use crate::symbol::{Parity, Side, Symbol};
pub use crate::transform::{CandidateSide, Transform, TransformKind, TransformRegistry};
