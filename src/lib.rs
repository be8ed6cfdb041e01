#![doc(test(attr(deny(warnings))))]

//! spendcat serves a two-level spending category hierarchy and the
//! per-category questions attached to it over a JSON HTTP surface.

pub mod cli;
pub mod errors;
pub mod http;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_filter(utils::DEFAULT_LOG_FILTER);
}

/// Initializes global tracing with `filter` (overridden by `RUST_LOG`).
/// Only the first call in a process takes effect.
pub fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        if utils::install_subscriber(utils::log_filter(filter)) {
            tracing::info!("spendcat tracing initialized.");
        }
    });
}
