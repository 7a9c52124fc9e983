//! Integration tests for log level filtering.
//!
//! These tests verify that the verbosity configuration decides which
//! `info_log!`/`debug_log!` messages are recorded while `warn_log!` always
//! gets through.

use logging::{
    DebugFlag, DiagnosticEvent, InfoFlag, VerbosityConfig, debug_log, drain_events, info_log,
    init, start_capture, stop_capture, warn_log,
};

fn messages() -> Vec<String> {
    drain_events()
        .into_iter()
        .map(|event| event.message().to_owned())
        .collect()
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Verifies info_log emits when the flag level is sufficient.
#[test]
fn info_log_emits_when_level_sufficient() {
    let mut config = VerbosityConfig::default();
    config.info.flist = 2;
    init(config);
    start_capture();

    info_log!(Flist, 1, "level one");
    info_log!(Flist, 2, "level two");
    info_log!(Flist, 3, "level three");

    assert_eq!(messages(), vec!["level one", "level two"]);
    stop_capture();
}

/// Verifies debug_log is silent with the default configuration.
#[test]
fn debug_log_suppressed_by_default() {
    init(VerbosityConfig::default());
    start_capture();

    debug_log!(Io, 1, "read_dir {}", "/srv");
    debug_log!(Dup, 1, "visited {}", "/srv");

    assert!(drain_events().is_empty());
    stop_capture();
}

/// Verifies debug_log records flag and level.
#[test]
fn debug_log_records_flag_and_level() {
    let mut config = VerbosityConfig::default();
    config.debug.depth = 3;
    init(config);
    start_capture();

    let depth = 4;
    debug_log!(Depth, 3, "descending to depth {depth}");

    let events = drain_events();
    assert_eq!(
        events,
        vec![DiagnosticEvent::Debug {
            flag: DebugFlag::Depth,
            level: 3,
            message: "descending to depth 4".to_owned(),
        }]
    );
    stop_capture();
}

// ============================================================================
// Flag Independence Tests
// ============================================================================

/// Verifies different info flags have independent levels.
#[test]
fn info_flags_have_independent_levels() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("skip1,nonreg3").expect("valid flags");
    init(config);
    start_capture();

    info_log!(Skip, 2, "skip at two");
    info_log!(Nonreg, 2, "nonreg at two");
    info_log!(Symsafe, 1, "symsafe at one");

    assert_eq!(messages(), vec!["nonreg at two"]);
    stop_capture();
}

// ============================================================================
// Warning Tests
// ============================================================================

/// Verifies warnings bypass the verbosity configuration.
#[test]
fn warnings_ignore_verbosity() {
    init(VerbosityConfig::default());
    start_capture();

    warn_log!(Flist, "directory does not exist: '{}'", "/missing");

    let events = drain_events();
    assert_eq!(events.len(), 1);
    assert!(events[0].is_warning());
    assert!(matches!(
        &events[0],
        DiagnosticEvent::Warning { flag: InfoFlag::Flist, .. }
    ));
    stop_capture();
}

/// Verifies emission order is preserved across severities.
#[test]
fn mixed_severities_keep_order() {
    init(VerbosityConfig::from_verbose_level(4));
    start_capture();

    debug_log!(Io, 1, "first");
    warn_log!(Skip, "second");
    info_log!(Flist, 1, "third");

    assert_eq!(messages(), vec!["first", "second", "third"]);
    stop_capture();
}

/// Verifies capture is per thread.
#[test]
fn capture_is_thread_local() {
    start_capture();
    std::thread::spawn(|| {
        warn_log!(Skip, "from another thread");
    })
    .join()
    .expect("thread joins");

    assert!(drain_events().is_empty());
    stop_capture();
}
