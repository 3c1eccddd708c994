// crates/rungs-cli/src/cmd/transforms.rs

use clap::Args;
use rungs_core::TransformRegistry;

#[derive(Args, Debug, Clone)]
pub struct TransformsArgs {
    /// Include reversed counterparts (rotate180 and friends)
    #[arg(long, default_value_t = false)]
    pub reversed: bool,
}

pub fn run(args: TransformsArgs) -> anyhow::Result<()> {
    let mut reg = TransformRegistry::standard();
    if args.reversed {
        reg = reg.with_reversed();
    }
    println!("name,candidate_side,involution");
    for t in reg.iter() {
        println!("{},{:?},{}", t.name(), t.candidate_side(), t.is_involution());
    }
    Ok(())
}
