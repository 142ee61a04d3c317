//! Tracing setup for embedding callers.
//!
//! The engine itself only emits `tracing` events; subscribing is the
//! host's choice. `try_init` installs a fmt subscriber filtered by the
//! `STRATA_LOG` environment variable (falling back to `warn`).

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the default log filter.
pub const LOG_ENV_VAR: &str = "STRATA_LOG";

/// Install a global fmt subscriber honoring `STRATA_LOG`.
///
/// Returns an error if a global subscriber is already set; callers that
/// manage their own subscriber simply skip this.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()
}
