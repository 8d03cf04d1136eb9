// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! opskit command-line entry point.
//!
//! Commands return an exit code (or a [`Fatal`]) instead of calling
//! `std::process::exit()` directly, so `main()` owns process termination.

use clap::Parser;
use opskit_core::{report_fatal_and_exit, Fatal};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "opskit", version, about = "Operations tooling support commands")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Halts the whole process on Ctrl-C, even while a child is awaited.
    tokio::spawn(opskit_core::interrupt::install());

    let cli = Cli::parse();
    match commands::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(err) => handle_error(err),
    }
}

/// A `Fatal` terminates with its own code after one log record; anything
/// else is an environment-level failure reported plainly on stderr.
fn handle_error(err: anyhow::Error) -> ! {
    match err.downcast::<Fatal>() {
        Ok(fatal) => report_fatal_and_exit(&fatal),
        Err(err) => {
            eprintln!("opskit: {err:#}");
            std::process::exit(1)
        }
    }
}
