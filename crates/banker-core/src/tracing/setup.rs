//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Banker tracing/logging system.
///
/// Reads the `BANKER_LOG` environment variable for per-crate log levels.
/// Format: `BANKER_LOG=banker_safety=debug,banker_input=warn`
///
/// Falls back to `default_filter` (usually `LoggingConfig::effective_filter`)
/// if `BANKER_LOG` is not set or is invalid. Events go to stderr so they never
/// interleave with reports on stdout.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER));

        // A host may already have installed a global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
