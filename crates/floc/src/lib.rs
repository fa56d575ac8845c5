//! Command-line front end for the type classifier and allocation records.

pub mod commands;
pub mod config;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at program start. Uses `RUST_LOG` env var for filtering:
/// - `RUST_LOG=flo_alloc=trace` - every allocation record decision
/// - `RUST_LOG=flo_types=debug` - registry population
/// - `RUST_LOG=debug` - everything
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
