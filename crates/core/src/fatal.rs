// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal error type that carries a process exit code.
//!
//! A `Fatal` is constructed at the site that detects an unrecoverable
//! condition and propagates up unmodified until a reporter in
//! [`crate::report`] logs it and terminates the process with the embedded
//! code.

use thiserror::Error;

/// An unrecoverable condition with an intended process-exit code.
///
/// Construction has no side effects; a `Fatal` is a pure value until a
/// reporter consumes it. `exit_code` is positive by contract (77 for the
/// privilege check, the child's status from
/// [`run_or_fail`](crate::exec::run_or_fail), small caller-chosen integers
/// elsewhere); the one exception is the `-1` sentinel for a child killed
/// by a signal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("({exit_code}) {message}")]
pub struct Fatal {
    /// Human-readable description. A fatal built while handling another
    /// fatal embeds the inner rendering verbatim rather than unwrapping it.
    pub message: String,
    /// Exit code the process terminates with once this error is reported.
    pub exit_code: i32,
}

impl Fatal {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

#[cfg(test)]
#[path = "fatal_tests.rs"]
mod tests;
