pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "spendcat=info";

/// `RUST_LOG` wins over `directive`; an unparsable directive falls back to
/// the default.
pub fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the stderr subscriber. Returns false when one is already set.
pub fn install_subscriber(filter: EnvFilter) -> bool {
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
