//! Diagnostic logging setup.
//!
//! Vial construction logs through `tracing`; this installs a stderr
//! subscriber for test harnesses that want to see it.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to the configured level.
///
/// Returns `false` if a global subscriber was already installed, so it is
/// safe to call from every test.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("testing_vial={}", config.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = Config::default();
        init(&config);
        assert!(!init(&config));
    }
}
