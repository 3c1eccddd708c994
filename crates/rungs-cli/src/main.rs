// crates/rungs-cli/src/main.rs

use clap::{Parser, Subcommand};

use rungs_cli::{cmd, logging};

#[derive(Parser)]
#[command(name = "rungs-cli")]
#[command(about = "Ladder outcome pattern matcher / scorer", long_about = None)]
pub struct Cli {
    /// -v info, -vv debug, -vvv trace (overrides RUNGS_LOG)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates for the next outcome (block matching + scorers)
    Predict(cmd::predict::PredictArgs),

    /// List raw window matches for one size and transform (CSV)
    Scan(cmd::scan::ScanArgs),

    /// Validate a history file and print its canonical sequence
    Encode(cmd::encode::EncodeArgs),

    /// List the transform registry
    Transforms(cmd::transforms::TransformsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Predict(args) => cmd::predict::run(args),
        Commands::Scan(args) => cmd::scan::run(args),
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Transforms(args) => cmd::transforms::run(args),
    }
}
