// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal reporting: log sinks and the log-and-terminate entry points.
//!
//! Every reporting path emits exactly one record. The sink is passed
//! explicitly rather than held as ambient state, so tests can record what
//! was emitted; [`TracingSink`] is the production implementation.

use std::io::Write;

use crate::fatal::Fatal;

/// Exit code used by [`report_and_exit`]: "an error was reported",
/// independent of the error's own code.
pub const EXIT_REPORTED: i32 = 1;

/// Leveled logging capability the reporters write through.
pub trait LogSink {
    /// Emit one record at the highest severity.
    fn critical(&self, message: &str);
    /// Emit one informational record.
    fn info(&self, message: &str);
}

/// Production sink backed by the global `tracing` dispatcher.
///
/// CRITICAL maps to `tracing::error!` and INFO to `tracing::info!`. When
/// no subscriber would observe the record it would otherwise vanish
/// silently; instead the sink writes a no-handler notice followed by the
/// intended record to stderr, so the record is never lost. Emitting while
/// unconfigured is a recoverable condition, not a crash, and it is not
/// deduplicated.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

/// Logger identity shared by the tracing target and the no-handler notice.
const LOGGER: &str = "opskit";

/// Write the no-handler notice followed by the intended record.
///
/// Both lines go to the same writer, in this order, every time; there is
/// no duplicate suppression.
fn write_fallback(out: &mut dyn Write, level: &str, message: &str) {
    let _ = writeln!(
        out,
        "CRITICAL No handlers could be found for logger \"{LOGGER}\""
    );
    let _ = writeln!(out, "{level} {message}");
}

impl TracingSink {
    fn fallback(level: &str, message: &str) {
        let stderr = std::io::stderr();
        write_fallback(&mut stderr.lock(), level, message);
    }
}

impl LogSink for TracingSink {
    fn critical(&self, message: &str) {
        if tracing::event_enabled!(target: LOGGER, tracing::Level::ERROR) {
            tracing::error!(target: LOGGER, "{message}");
        } else {
            Self::fallback("CRITICAL", message);
        }
    }

    fn info(&self, message: &str) {
        if tracing::event_enabled!(target: LOGGER, tracing::Level::INFO) {
            tracing::info!(target: LOGGER, "{message}");
        } else {
            Self::fallback("INFO", message);
        }
    }
}

/// Render the reporting line for a caught fatal: `"(code) Fatal: message"`.
fn fatal_line(err: &Fatal) -> String {
    format!("({}) Fatal: {}", err.exit_code, err.message)
}

/// Log a caught [`Fatal`] at critical severity through `sink` and return.
///
/// The message portion is embedded verbatim, so a fatal built from another
/// fatal's rendering keeps the full causal chain in one line, e.g.
/// `(1) Fatal: (4) underlying failure`.
pub fn report_with(sink: &dyn LogSink, err: &Fatal) {
    sink.critical(&fatal_line(err));
}

/// [`report_with`] through the production [`TracingSink`].
pub fn report(err: &Fatal) {
    report_with(&TracingSink, err);
}

/// Log the fatal, then terminate with [`EXIT_REPORTED`].
///
/// The fixed code records the fact that an error was reported; the error's
/// own code is only echoed inside the log line.
pub fn report_and_exit(err: &Fatal) -> ! {
    report(err);
    std::process::exit(EXIT_REPORTED)
}

/// Log exactly the fatal's message (no prefix, no code echo) through
/// `sink` and return the code to terminate with.
pub fn report_fatal_with(sink: &dyn LogSink, err: &Fatal) -> i32 {
    sink.critical(&err.message);
    err.exit_code
}

/// Log exactly the fatal's message at critical severity, then terminate
/// with the fatal's own exit code.
pub fn report_fatal_and_exit(err: &Fatal) -> ! {
    std::process::exit(report_fatal_with(&TracingSink, err))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
