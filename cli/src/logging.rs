//! Logging setup for the `weekspend` binary.
//!
//! Logs go to stderr so the report on stdout stays clean. `RUST_LOG` takes
//! precedence over the `-v` flag:
//! ```bash
//! RUST_LOG=weekspend_core=debug weekspend report --limit 100 20 0 15
//! ```

use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(verbosity))
    };

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
