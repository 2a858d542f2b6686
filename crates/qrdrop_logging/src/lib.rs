#![deny(missing_docs)]
//! Shared logging utilities for the qrdrop workspace.
//!
//! Every crate logs through the `qrdrop_*` macros so the facade can be swapped
//! in one place. Hosts pick a backend; tests call [`initialize_for_tests`].

#[doc(hidden)]
pub use log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! qrdrop_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!(target: "qrdrop", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! qrdrop_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!(target: "qrdrop", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! qrdrop_info {
    ($($arg:tt)*) => {{
        $crate::log::info!(target: "qrdrop", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! qrdrop_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!(target: "qrdrop", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! qrdrop_error {
    ($($arg:tt)*) => {{
        $crate::log::error!(target: "qrdrop", $($arg)*);
    }};
}

/// Level used by hosts that do not configure one explicitly.
///
/// Debug builds log at `Debug`, release builds at `Info`.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
