// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive-interrupt (Ctrl-C) termination.
//!
//! An interrupted run writes one separating newline to stderr (setting the
//! terminal's `^C` echo off from subsequent log output), emits one INFO
//! record, and terminates with the POSIX SIGINT convention code. The
//! handler runs to completion; the interrupted operation is never resumed.

use std::io::Write;

use crate::report::{LogSink, TracingSink};

/// POSIX convention for termination by SIGINT.
pub const EXIT_INTERRUPT: i32 = 130;

const HALT_MESSAGE: &str = "(130) Halted via KeyboardInterrupt.";

/// Write the interrupt report and return the exit code to terminate with.
///
/// Exactly one `\n` goes to `stderr` and exactly one INFO record to
/// `sink`.
pub fn report_interrupt_with(sink: &dyn LogSink, stderr: &mut dyn Write) -> i32 {
    let _ = stderr.write_all(b"\n");
    let _ = stderr.flush();
    sink.info(HALT_MESSAGE);
    EXIT_INTERRUPT
}

/// Terminate the process in response to an interactive interrupt.
pub fn halt_on_interrupt() -> ! {
    let code = report_interrupt_with(&TracingSink, &mut std::io::stderr());
    std::process::exit(code)
}

/// Wait for Ctrl-C, then halt the process.
///
/// Spawn this as its own task so the handler fires even while the caller
/// is blocked awaiting a child process.
pub async fn install() {
    if tokio::signal::ctrl_c().await.is_ok() {
        halt_on_interrupt();
    }
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
