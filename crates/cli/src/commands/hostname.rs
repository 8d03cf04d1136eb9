// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `opskit hostname`: strict DNS hostname validation.

use clap::Args;
use opskit_core::{is_valid_hostname, Fatal};

/// Exit code reported for a hostname that fails validation.
const EXIT_INVALID_HOSTNAME: i32 = 2;

#[derive(Debug, Args)]
pub struct HostnameArgs {
    /// Hostname to validate
    pub hostname: String,
}

pub fn run(args: HostnameArgs) -> anyhow::Result<i32> {
    if is_valid_hostname(&args.hostname) {
        Ok(0)
    } else {
        Err(Fatal::new(
            format!("Invalid hostname: {}", args.hostname),
            EXIT_INVALID_HOSTNAME,
        )
        .into())
    }
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod tests;
