#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the diagnostic side channel of the treewalk workspace.
//! Library code reports notable events through the [`warn_log!`],
//! [`info_log!`] and [`debug_log!`] macros; each event belongs to a flag
//! category ([`InfoFlag`] or [`DebugFlag`]) so verbosity can be tuned per
//! concern the same way `--info=FLAG[N]` / `--debug=FLAG[N]` style options
//! work.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds a level per flag. It is installed per thread
//!   with [`init`] and consulted by the info/debug macros.
//! - Every emitted event is forwarded to [`tracing`] under a
//!   `treewalk::<flag>` target. With the `subscriber` feature,
//!   `init_tracing` installs a formatter on stderr honouring `RUST_LOG`.
//! - While [`start_capture`] is active, events are also recorded in a
//!   thread-local buffer that [`drain_events`] empties. Tests use this to
//!   assert on diagnostics without scraping stderr.
//!
//! # Invariants
//!
//! - Warnings are never filtered by the verbosity configuration.
//! - Captured events keep emission order and never leak across threads.
//!
//! # Examples
//!
//! ```
//! use logging::{DiagnosticEvent, InfoFlag, warn_log};
//!
//! logging::start_capture();
//! warn_log!(Symsafe, "circular symlink detected: '{}'", "/srv/loop");
//!
//! let events = logging::drain_events();
//! assert_eq!(
//!     events,
//!     vec![DiagnosticEvent::Warning {
//!         flag: InfoFlag::Symsafe,
//!         message: "circular symlink detected: '/srv/loop'".to_string(),
//!     }]
//! );
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "subscriber")]
mod tracing_bridge;

pub use config::{FlagParseError, VerbosityConfig};
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, current, debug_gte, drain_events, emit_debug, emit_info, emit_warning,
    info_gte, init, is_capturing, start_capture, stop_capture,
};
#[cfg(feature = "subscriber")]
pub use tracing_bridge::{env_filter, init_tracing};
