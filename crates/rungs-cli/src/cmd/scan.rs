// crates/rungs-cli/src/cmd/scan.rs

use clap::Args;
use rungs_core::scan::{find_matches, query_window};
use rungs_core::Transform;

use crate::cmd::{load_config, HistoryArgs};
use crate::io::history_file;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: HistoryArgs,

    /// Engine config (TOML) supplying history order/limit
    #[arg(long)]
    pub config: Option<String>,

    /// Window size
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Transform name (see `transforms`)
    #[arg(long, default_value = "identity")]
    pub transform: String,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let transform: Transform = args.transform.parse()?;
    let history = history_file::load(&args.source, &load_config(args.config.as_deref())?)?;
    let seq = &history.symbols;

    let Some(query) = query_window(seq, args.size) else {
        eprintln!(
            "insufficient history: need {} symbols for size {}, have {}",
            args.size + 1,
            args.size,
            seq.len()
        );
        return Ok(());
    };

    let target: Vec<String> = transform.apply(query).iter().map(|s| s.to_string()).collect();
    eprintln!("query     = {}", query.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" "));
    eprintln!("target    = {}", target.join(" "));
    eprintln!("transform = {} ({:?})", transform, transform.candidate_side());

    println!("start,end,candidate_index,candidate");
    let matches = find_matches(seq, args.size, transform);
    for m in &matches {
        // find_matches only returns in-range candidates
        if let Some(ci) = m.candidate_index(seq.len()) {
            println!("{},{},{},{}", m.start, m.start + m.size, ci, seq[ci]);
        }
    }
    eprintln!("matches   = {}", matches.len());
    Ok(())
}
