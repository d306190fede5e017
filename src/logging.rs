//! Tracing subscriber setup
//!
//! Diagnostics go to stderr so JSON on stdout stays parseable. `RUST_LOG`
//! overrides the default `cardcycle=warn` filter.

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

pub const DEFAULT_FILTER: &str = "cardcycle=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// The stderr subscriber `init_tracing` installs
pub fn stderr_subscriber() -> impl Subscriber + Send + Sync {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}

/// Install the global subscriber once; later calls do nothing
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // another subscriber may already be installed by an embedding program
        let _ = tracing::subscriber::set_global_default(stderr_subscriber());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_subscriber_scoped_to_closure() {
        let events = tracing::subscriber::with_default(stderr_subscriber(), || {
            tracing::warn!("scoped subscriber");
            1
        });
        assert_eq!(events, 1);
    }
}
