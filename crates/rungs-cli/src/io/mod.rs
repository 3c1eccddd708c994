// crates/rungs-cli/src/io/mod.rs

pub mod history_file;
pub mod report;
