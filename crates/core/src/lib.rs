// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! opskit-core: support library for operations tooling.
//!
//! Wraps external command execution ([`exec`]), carries fatal conditions
//! with their intended process-exit codes ([`fatal`]), logs and terminates
//! on them ([`report`]), halts cleanly on Ctrl-C ([`interrupt`]), and
//! validates DNS hostnames ([`hostname`]).

pub mod columns;
pub mod exec;
pub mod fatal;
pub mod hostname;
pub mod interrupt;
pub mod privilege;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use columns::{format_columns, Align};
pub use exec::{run_captured, run_or_fail, CommandResult, ExecError, ExecRequest};
pub use fatal::Fatal;
pub use hostname::is_valid_hostname;
pub use interrupt::{halt_on_interrupt, EXIT_INTERRUPT};
pub use privilege::{verify_root, EXIT_NOT_ROOT};
pub use report::{
    report, report_and_exit, report_fatal_and_exit, report_fatal_with, report_with, LogSink,
    TracingSink, EXIT_REPORTED,
};
