// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

mod hostname;
mod run;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute a command, capturing its output
    Run(run::RunArgs),
    /// Validate a hostname against the DNS grammar
    Hostname(hostname::HostnameArgs),
}

pub async fn dispatch(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Run(args) => run::run(args).await,
        Command::Hostname(args) => hostname::run(args),
    }
}
