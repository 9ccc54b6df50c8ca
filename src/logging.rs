use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ============================================================================
// Logging Setup
// ============================================================================
//
// RUST_LOG wins over the configured default filter.
// Example: RUST_LOG=debug production-orders
//
// ============================================================================

/// Install the global subscriber; fails if one is already set
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Verbose subscriber writing through the test harness; safe to call repeatedly
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
