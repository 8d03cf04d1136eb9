// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution with captured output.
//!
//! One foreground child per call: the child's stdout and stderr are piped,
//! fully drained, and the child is reaped before the call returns.
//! [`run_captured`] leaves exit-status policy to the caller;
//! [`run_or_fail`] turns any non-zero status into a [`Fatal`] carrying the
//! captured stderr as its message and the status as its exit code.

use std::path::PathBuf;
use std::process::Stdio;

use serde::Serialize;
use thiserror::Error;

use crate::fatal::Fatal;

/// Description of a single child-process invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExecRequest {
    /// Program and arguments; `argv[0]` is the program.
    pub argv: Vec<String>,
    /// Working directory for the child (caller's current directory when `None`).
    pub cwd: Option<PathBuf>,
    /// User id the child switches to before exec (privilege drop).
    pub uid: Option<u32>,
    /// Group id the child switches to before exec.
    pub gid: Option<u32>,
}

impl ExecRequest {
    pub fn new(argv: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            cwd: None,
            uid: None,
            gid: None,
        }
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn gid(mut self, gid: u32) -> Self {
        self.gid = Some(gid);
        self
    }
}

/// Outcome of one child-process run.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    /// Numeric exit status (0 = success; -1 when the child was killed by a
    /// signal).
    pub exit_status: i32,
    /// Full captured stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Full captured stderr, lossily decoded as UTF-8.
    pub stderr: String,
}

/// Errors from launching a child process or failing hard on its exit.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Empty argv is a programming error at the call site.
    #[error("empty argv: nothing to execute")]
    EmptyArgv,

    /// The child never started (program missing, privilege drop refused).
    /// Environment-level; never converted into a [`Fatal`].
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The program that could not be started.
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero exit surfaced by [`run_or_fail`], carrying the captured
    /// stderr as its message.
    #[error(transparent)]
    Fatal(#[from] Fatal),
}

/// Execute `req` and capture its exit status and both output streams.
///
/// Blocks (awaits) until the child terminates. A non-zero exit status is
/// not an error here; that is the caller's decision.
pub async fn run_captured(req: &ExecRequest) -> Result<CommandResult, ExecError> {
    let (program, args) = req.argv.split_first().ok_or(ExecError::EmptyArgv)?;

    let span = tracing::info_span!(
        "exec",
        cmd = %program,
        exit_status = tracing::field::Empty,
    );

    let mut command = tokio::process::Command::new(program);
    command.args(args);
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    if let Some(ref dir) = req.cwd {
        command.current_dir(dir);
    }
    if let Some(uid) = req.uid {
        command.uid(uid);
    }
    if let Some(gid) = req.gid {
        command.gid(gid);
    }

    let child = command.spawn().map_err(|source| ExecError::Spawn {
        command: program.clone(),
        source,
    })?;

    // wait_with_output drains both pipes before reaping, so the child can
    // neither deadlock on a full pipe nor linger as a zombie.
    let output = child
        .wait_with_output()
        .await
        .map_err(|source| ExecError::Spawn {
            command: program.clone(),
            source,
        })?;

    let exit_status = output.status.code().unwrap_or(-1);
    span.record("exit_status", exit_status);

    Ok(CommandResult {
        exit_status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Execute `req` and raise a [`Fatal`] on any non-zero exit status.
///
/// The fatal's message is the captured stderr verbatim (trailing
/// whitespace preserved, empty allowed) and its exit code is the child's
/// status. On status 0 the result is returned exactly as [`run_captured`]
/// would return it.
pub async fn run_or_fail(req: &ExecRequest) -> Result<CommandResult, ExecError> {
    let result = run_captured(req).await?;
    if result.exit_status != 0 {
        return Err(ExecError::Fatal(Fatal::new(
            result.stderr,
            result.exit_status,
        )));
    }
    Ok(result)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
