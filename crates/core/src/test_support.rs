// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles shared across module tests.

use parking_lot::Mutex;

use crate::report::LogSink;

/// Severity of a recorded log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Critical,
    Info,
}

/// [`LogSink`] that records every emitted line with its level.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub(crate) fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().clone()
    }
}

impl LogSink for RecordingSink {
    fn critical(&self, message: &str) {
        self.records.lock().push((Level::Critical, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.records.lock().push((Level::Info, message.to_string()));
    }
}
