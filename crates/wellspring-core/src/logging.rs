//! Logging setup.
//!
//! Installs a `tracing_subscriber` fmt subscriber filtered by `RUST_LOG`,
//! falling back to the level passed in by the caller.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("not a valid filter ===");
    }
}
