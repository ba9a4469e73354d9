// ============================================================================
// Logging Setup
// Optional subscriber installation for demos and headless hosts
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise [`default_filter`] applies. Fails if a
/// global subscriber already exists.
pub fn init_logging(level: &str) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
        .map_err(|e| format!("failed to install tracing subscriber: {e}"))
}

/// This crate at `level`, everything else at `warn`.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("currency_mask={level},warn"))
}
