//! Tracing setup for hosts embedding the registry.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host. `init` is a convenience matching the usual stderr setup.

use tracing_subscriber::filter::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// `info` when the variable is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed, so it is
/// safe to call from every test.
pub fn init() -> bool {
    init_with_default("info")
}

/// Like [`init`], but with a caller-chosen fallback directive.
pub fn init_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
