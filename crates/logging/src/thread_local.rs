//! crates/logging/src/thread_local.rs
//! Thread-local storage for verbosity configuration and event collection.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::{Cell, RefCell};

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    static CAPTURE: Cell<bool> = const { Cell::new(false) };
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Warning that always surfaces regardless of verbosity.
    Warning {
        /// The info flag category.
        flag: InfoFlag,
        /// The diagnostic message.
        message: String,
    },
    /// Info-level diagnostic event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Warning { message, .. }
            | Self::Info { message, .. }
            | Self::Debug { message, .. } => message,
        }
    }

    /// Reports whether the event is a warning.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Returns a copy of the current thread's verbosity configuration.
pub fn current() -> VerbosityConfig {
    VERBOSITY.with(|v| v.borrow().clone())
}

/// Check if the info flag is at or above the specified level.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().info.get(flag) >= level)
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Start collecting events on the current thread, discarding earlier ones.
pub fn start_capture() {
    CAPTURE.with(|c| c.set(true));
    EVENTS.with(|e| e.borrow_mut().clear());
}

/// Stop collecting events on the current thread.
///
/// Events collected so far remain available to [`drain_events`].
pub fn stop_capture() {
    CAPTURE.with(|c| c.set(false));
}

/// Reports whether events are being collected on the current thread.
pub fn is_capturing() -> bool {
    CAPTURE.with(Cell::get)
}

fn record(event: DiagnosticEvent) {
    if is_capturing() {
        EVENTS.with(|e| e.borrow_mut().push(event));
    }
}

// `tracing` needs the target as a literal, so each flag gets its own arm.
macro_rules! forward {
    ($level:ident, $flag:expr, $message:expr, { $($variant:path => $target:literal),+ $(,)? }) => {
        match $flag {
            $($variant => ::tracing::$level!(target: $target, "{}", $message),)+
        }
    };
}

fn forward_warning(flag: InfoFlag, message: &str) {
    forward!(warn, flag, message, {
        InfoFlag::Flist => "treewalk::flist",
        InfoFlag::Nonreg => "treewalk::nonreg",
        InfoFlag::Skip => "treewalk::skip",
        InfoFlag::Symsafe => "treewalk::symsafe",
    });
}

fn forward_info(flag: InfoFlag, message: &str) {
    forward!(info, flag, message, {
        InfoFlag::Flist => "treewalk::flist",
        InfoFlag::Nonreg => "treewalk::nonreg",
        InfoFlag::Skip => "treewalk::skip",
        InfoFlag::Symsafe => "treewalk::symsafe",
    });
}

fn forward_debug(flag: DebugFlag, message: &str) {
    forward!(debug, flag, message, {
        DebugFlag::Depth => "treewalk::depth",
        DebugFlag::Dup => "treewalk::dup",
        DebugFlag::Flist => "treewalk::flist",
        DebugFlag::Io => "treewalk::io",
    });
}

/// Emit a warning event.
pub fn emit_warning(flag: InfoFlag, message: String) {
    forward_warning(flag, &message);
    record(DiagnosticEvent::Warning { flag, message });
}

/// Emit an info diagnostic event.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    forward_info(flag, &message);
    record(DiagnosticEvent::Info {
        flag,
        level,
        message,
    });
}

/// Emit a debug diagnostic event.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    forward_debug(flag, &message);
    record(DiagnosticEvent::Debug {
        flag,
        level,
        message,
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}
