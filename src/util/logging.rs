//! Tracing setup shared by the desktop and web launches.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,uht_toolkit=debug";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Level comes from `RUST_LOG`, falling back to
/// `info` (and `debug` for this crate). Calling it twice is a no-op.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false);

    if tracing_subscriber::registry()
        .with(make_filter())
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::info!("logging initialised twice without panicking");
    }
}
