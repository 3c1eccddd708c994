// crates/rungs-core/src/scan/mod.rs

pub mod matcher;
pub mod overlap;

pub use matcher::{find_matches, query_window, Match};
pub use overlap::{ranges_intersect, OverlapResolver};
