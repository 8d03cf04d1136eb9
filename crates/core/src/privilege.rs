// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Root-privilege verification.

use nix::unistd::Uid;

use crate::fatal::Fatal;

/// Fixed exit code for a failed privilege check (sysexits `EX_NOPERM`).
pub const EXIT_NOT_ROOT: i32 = 77;

/// Require root (or equivalent) to continue.
///
/// Checks the effective uid, so a sudo'd process passes.
pub fn verify_root() -> Result<(), Fatal> {
    if Uid::effective().is_root() {
        Ok(())
    } else {
        Err(Fatal::new(
            "Must be root or equivalent (ex. sudo).",
            EXIT_NOT_ROOT,
        ))
    }
}

#[cfg(test)]
#[path = "privilege_tests.rs"]
mod tests;
