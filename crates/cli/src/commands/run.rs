// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `opskit run`: execute one foreground child with captured output.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use opskit_core::{run_captured, run_or_fail, verify_root, CommandResult, ExecError, ExecRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Working directory for the child process
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// User id the child switches to before exec
    #[arg(long)]
    pub uid: Option<u32>,

    /// Group id the child switches to before exec
    #[arg(long)]
    pub gid: Option<u32>,

    /// Treat a non-zero exit as fatal: log the child's stderr and exit
    /// with the child's status
    #[arg(long)]
    pub fail_hard: bool,

    /// Refuse to run without root or equivalent
    #[arg(long)]
    pub require_root: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Command and arguments to execute
    #[arg(required = true, trailing_var_arg = true)]
    pub argv: Vec<String>,
}

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    if args.require_root {
        verify_root()?;
    }

    let mut req = ExecRequest::new(args.argv);
    if let Some(cwd) = args.cwd {
        req = req.cwd(cwd);
    }
    if let Some(uid) = args.uid {
        req = req.uid(uid);
    }
    if let Some(gid) = args.gid {
        req = req.gid(gid);
    }

    let result = if args.fail_hard {
        // Surface the Fatal itself so main() can downcast and terminate
        // with the child's status.
        match run_or_fail(&req).await {
            Ok(result) => result,
            Err(ExecError::Fatal(fatal)) => return Err(fatal.into()),
            Err(err) => return Err(err.into()),
        }
    } else {
        run_captured(&req).await?
    };

    print_result(&result, args.format)?;
    Ok(result.exit_status)
}

fn print_result(result: &CommandResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut stdout = std::io::stdout();
            stdout.write_all(result.stdout.as_bytes())?;
            stdout.flush()?;
            let mut stderr = std::io::stderr();
            stderr.write_all(result.stderr.as_bytes())?;
            stderr.flush()?;
        }
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(result).context("serializing command result")?;
            println!("{rendered}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
