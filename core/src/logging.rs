//! Tracing initialization for the binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g.
/// `DEARU_LOG=libdearu_core=debug`.
pub const LOG_ENV: &str = "DEARU_LOG";

/// Install a stderr fmt subscriber.
///
/// `DEARU_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// when `verbose` is set. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
