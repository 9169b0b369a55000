//! Console logging via tracing.

use tracing_subscriber::EnvFilter;

/// Initialize the subscriber. Verbosity comes from the CLI (`-v`, `-vv`);
/// `RUST_LOG` overrides everything when set.
pub fn init(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,aim={default}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
