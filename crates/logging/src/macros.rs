//! crates/logging/src/macros.rs
//! Logging macros keyed by diagnostic flag.
//!
//! Each macro formats its arguments once, forwards the message to `tracing`
//! under a `treewalk::<flag>` target and records it for [`crate::drain_events`]
//! while capture is enabled.

/// Emit a warning under an info flag category.
///
/// Warnings are never suppressed by the verbosity configuration.
///
/// # Example
/// ```
/// logging::start_capture();
/// logging::warn_log!(Skip, "file not accessible: '{}'", "/tmp/x");
/// let events = logging::drain_events();
/// assert_eq!(events[0].message(), "file not accessible: '/tmp/x'");
/// ```
#[macro_export]
macro_rules! warn_log {
    ($flag:ident, $($arg:tt)+) => {{
        $crate::emit_warning($crate::InfoFlag::$flag, ::std::format!($($arg)+));
    }};
}

/// Emit an info message when the flag is at or above `level`.
///
/// # Example
/// ```
/// use logging::{VerbosityConfig, info_log};
///
/// logging::init(VerbosityConfig::from_verbose_level(1));
/// logging::start_capture();
/// info_log!(Flist, 1, "entering directory: {}", "/srv");
/// info_log!(Flist, 3, "suppressed");
/// assert_eq!(logging::drain_events().len(), 1);
/// ```
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let level: u8 = $level;
        if $crate::info_gte($crate::InfoFlag::$flag, level) {
            $crate::emit_info($crate::InfoFlag::$flag, level, ::std::format!($($arg)+));
        }
    }};
}

/// Emit a debug message when the flag is at or above `level`.
///
/// # Example
/// ```
/// use logging::{VerbosityConfig, debug_log};
///
/// let mut config = VerbosityConfig::default();
/// config.debug.dup = 1;
/// logging::init(config);
/// logging::start_capture();
/// debug_log!(Dup, 1, "entered {}", "/srv");
/// assert_eq!(logging::drain_events()[0].message(), "entered /srv");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let level: u8 = $level;
        if $crate::debug_gte($crate::DebugFlag::$flag, level) {
            $crate::emit_debug($crate::DebugFlag::$flag, level, ::std::format!($($arg)+));
        }
    }};
}
