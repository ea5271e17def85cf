//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CONFIG, LoggingConfig};

/// Install a global tracing subscriber configured from [`CONFIG`]
pub fn init() -> bool {
    init_tracing(&CONFIG.logging)
}

/// Install a global tracing subscriber.
///
/// `RUST_LOG` wins when it parses; otherwise the configured filter is used.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.rust_log.as_str()));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(json = config.json, "Tracing initialized");
            true
        }
        Err(_) => false,
    }
}
