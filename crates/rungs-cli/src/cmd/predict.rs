// crates/rungs-cli/src/cmd/predict.rs

use anyhow::Context;
use clap::Args;
use rungs_core::checksum::{hex16, history_id};
use rungs_core::engine::IntersectionMode;
use rungs_core::{Engine, EngineConfig};
use tracing::info;

use crate::cmd::{load_config, HistoryArgs};
use crate::io::{history_file, report::Report};

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub source: HistoryArgs,

    /// Engine config (TOML). Defaults to ./rungs.toml when present.
    #[arg(long)]
    pub config: Option<String>,

    /// Window sizes, comma separated (e.g. 3,4)
    #[arg(long, value_delimiter = ',')]
    pub window_sizes: Option<Vec<usize>>,

    /// Transforms, comma separated (identity, full-flip, start-flip, parity-flip,
    /// rotate180, <name>-reversed)
    #[arg(long, value_delimiter = ',')]
    pub transforms: Option<Vec<String>>,

    /// Also scan the reversed counterpart of every transform
    #[arg(long, default_value_t = false)]
    pub include_reversed: bool,

    /// Candidates kept per ranking
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Larger windows claim their ranges; overlapping smaller matches are dropped
    #[arg(long, default_value_t = false)]
    pub overlap: bool,

    /// Intersection table: none | all-transforms | forward-vs-reversed
    #[arg(long)]
    pub intersection: Option<String>,

    /// Combination weight, repeatable: --weight block-match=1 --weight dedup=0.5
    #[arg(long = "weight", value_name = "NAME=W")]
    pub weights: Vec<String>,

    /// Print the JSON report instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Layered config with this command's flags applied last.
pub fn resolve_config(args: &PredictArgs) -> anyhow::Result<EngineConfig> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(ws) = &args.window_sizes {
        config.window_sizes = ws.clone();
    }
    if let Some(ts) = &args.transforms {
        config.transforms = ts.clone();
    }
    if args.include_reversed {
        config.include_reversed = true;
    }
    if let Some(k) = args.top_k {
        config.top_k = k;
    }
    if args.overlap {
        config.overlap_resolution = true;
    }
    if let Some(i) = &args.intersection {
        config.intersection = parse_intersection(i)?;
    }
    for w in &args.weights {
        let (name, value) = w
            .split_once('=')
            .with_context(|| format!("weight must be NAME=W, got {w:?}"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("weight value in {w:?}"))?;
        config.scorers.weights.insert(name.trim().to_string(), value);
    }
    Ok(config)
}

fn parse_intersection(s: &str) -> anyhow::Result<IntersectionMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(IntersectionMode::None),
        "all-transforms" | "all" => Ok(IntersectionMode::AllTransforms),
        "forward-vs-reversed" | "rotated" => Ok(IntersectionMode::ForwardVsReversed),
        _ => anyhow::bail!("unknown intersection mode {s:?}"),
    }
}

pub fn build_report(args: &PredictArgs) -> anyhow::Result<Report> {
    let config = resolve_config(args)?;
    let params = config.to_params().context("engine config")?;
    let engine = Engine::new(params)?;

    let history = history_file::load(&args.source, &config)?;
    let id = hex16(&history_id(&history.symbols));
    info!(history_id = %id, len = history.symbols.len(), "predicting");

    let prediction = engine.predict(&history.symbols);
    Ok(Report {
        history_id: id,
        history_len: history.symbols.len(),
        latest_round: history.latest_round,
        prediction,
    })
}

pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    let report = build_report(&args)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    eprintln!("predict ok: report_id={}", report.report_id()?);
    Ok(())
}
