//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing` subscriber that matches the verbosity configuration.
//!
//! The logging macros always forward to `tracing` under `treewalk::<flag>`
//! targets. Without a subscriber those events go nowhere; binaries and test
//! harnesses that want them on stderr call [`init_tracing`] once at startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! let files = treewalk::walk("/srv/project");
//! ```

use super::config::VerbosityConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the filter used by [`init_tracing`].
///
/// `RUST_LOG` wins when it is set and parses; otherwise the directive derived
/// from `config` applies.
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.tracing_directive()))
}

/// Initialize tracing with the given verbosity configuration.
///
/// The configuration is also installed for the calling thread so the
/// `info_log!`/`debug_log!` gates agree with the subscriber filter. Returns
/// `false` when a global subscriber was already installed; the thread-local
/// configuration is updated either way.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let filter = env_filter(&config);
    super::thread_local::init(config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .is_ok()
}
