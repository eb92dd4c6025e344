//! Logging setup for binaries built on this library.
//!
//! Library code only emits `tracing` events. Binaries call [`init_logging`]
//! once at startup to print them to stderr, filtered by `RUST_LOG`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Filter used when verbose output is requested.
const VERBOSE_FILTER: &str = "debug";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Returns an error if a global
/// subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}
