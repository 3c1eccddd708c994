// crates/rungs-cli/src/cmd/encode.rs

use clap::Args;
use rungs_core::checksum::{hex16, history_id};
use rungs_core::history::History;

use crate::cmd::{load_config, HistoryArgs};
use crate::io::history_file;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub source: HistoryArgs,

    /// Engine config (TOML) supplying history order/limit. Defaults to ./rungs.toml when present.
    #[arg(long)]
    pub config: Option<String>,
}

/// The encoded history, with order/limit resolved the same way `predict` does.
pub fn history(args: &EncodeArgs) -> anyhow::Result<History> {
    history_file::load(&args.source, &load_config(args.config.as_deref())?)
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let history = history(&args)?;

    println!("idx,symbol");
    for (i, s) in history.symbols.iter().enumerate() {
        println!("{i},{s}");
    }
    eprintln!("symbols    = {}", history.symbols.len());
    eprintln!("history_id = {}", hex16(&history_id(&history.symbols)));
    if let Some(r) = &history.latest_round {
        eprintln!("latest     = {r}");
    }
    Ok(())
}
