//! Tracing setup for embedding hosts.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the default subscriber: compact output, INFO level with
/// crate-level DEBUG, overridable via `RUST_LOG`. Safe to call more than
/// once; later calls are no-ops.
pub fn init_default_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("solar_intake=debug,solar_core=debug,info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init();
}
