//! Tracing setup shared by the CLI entry points.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Install the global JSON subscriber. Safe to call more than once; only
/// the first call has any effect.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{service_name}=info,tower_http=info")));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    });
}
