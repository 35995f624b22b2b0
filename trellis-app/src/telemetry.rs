//! Tracing setup for the embedding shell.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. `RUST_LOG` wins; default is `info`
/// for our crates and `warn` for everything else.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,trellis_board=info,trellis_app=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
