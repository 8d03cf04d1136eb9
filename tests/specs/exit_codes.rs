// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-code and log-record contracts of `opskit run` and
//! `opskit hostname`.

use nix::unistd::Uid;

use crate::prelude::{opskit, stderr_of, stdout_of};

#[test]
fn run_propagates_child_exit_status() {
    let output = opskit()
        .args(["run", "--", "sh", "-c", "exit 5"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn run_echoes_captured_streams_in_text_mode() {
    let output = opskit()
        .args(["run", "--", "sh", "-c", "echo out; echo err >&2"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "out\n");
    assert_eq!(stderr_of(&output), "err\n");
}

#[test]
fn run_json_format_prints_the_command_result() {
    let output = opskit()
        .args(["run", "--format", "json", "--", "sh", "-c", "echo out"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("valid JSON on stdout");
    assert_eq!(parsed["exit_status"], 0);
    assert_eq!(parsed["stdout"], "out\n");
    assert_eq!(parsed["stderr"], "");
}

#[test]
fn run_honors_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    let output = opskit()
        .args(["run", "--cwd"])
        .arg(dir.path())
        .args(["--", "pwd"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output).trim_end(),
        canonical.to_string_lossy()
    );
}

#[test]
fn fail_hard_logs_child_stderr_and_exits_with_its_status() {
    let output = opskit()
        .args(["run", "--fail-hard", "--", "sh", "-c", "echo broken >&2; exit 3"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(3));
    // One CRITICAL record whose text is the child's stderr, verbatim.
    assert_eq!(stderr_of(&output).matches("broken").count(), 1);
}

#[test]
fn fail_hard_success_behaves_like_a_plain_run() {
    let output = opskit()
        .args(["run", "--fail-hard", "--", "sh", "-c", "echo ok"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "ok\n");
}

#[test]
fn missing_program_is_an_environment_error_with_exit_one() {
    let output = opskit()
        .args(["run", "--", "opskit-spec-no-such-program"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("opskit: failed to spawn"));
}

#[test]
fn require_root_gates_on_effective_uid() {
    let output = opskit()
        .args(["run", "--require-root", "--", "sh", "-c", "exit 0"])
        .output()
        .expect("run opskit");
    if Uid::effective().is_root() {
        assert_eq!(output.status.code(), Some(0));
    } else {
        assert_eq!(output.status.code(), Some(77));
        assert!(stderr_of(&output).contains("Must be root or equivalent (ex. sudo)."));
    }
}

#[test]
fn valid_hostname_exits_zero() {
    let output = opskit()
        .args(["hostname", "host.example.com."])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn invalid_hostname_exits_two_with_one_log_record() {
    let output = opskit()
        .args(["hostname", "127.0.0.1"])
        .output()
        .expect("run opskit");
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert_eq!(stderr.matches("Invalid hostname: 127.0.0.1").count(), 1);
}
