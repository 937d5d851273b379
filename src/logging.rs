//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`. Nothing below `warn` is shown
//! unless `-v` is given or `SYMLINK_PERMUTE_CMD_LOG` holds a filter directive.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "SYMLINK_PERMUTE_CMD_LOG";

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized
}
