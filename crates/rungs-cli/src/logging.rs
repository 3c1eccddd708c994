// crates/rungs-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RUNGS_LOG";

/// stderr subscriber. -v flags win; otherwise RUNGS_LOG; otherwise warn.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
