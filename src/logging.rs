//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with command output. The
//! default filter only shows warnings from this crate; set `RUST_LOG` (for
//! example `RUST_LOG=spendwise=debug`) to see more.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "spendwise=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber; later calls do nothing
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by an embedding program.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
