// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interrupt handling: SIGINT terminates with 130 and the contracted
//! stderr shape, even while a child process is being awaited.

use std::process::{Command, Stdio};
use std::thread::sleep;
use std::time::Duration;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

#[test]
fn sigint_halts_with_130_and_reports_once() {
    let bin = assert_cmd::cargo::cargo_bin("opskit");
    let mut child = Command::new(bin)
        .args(["run", "--", "sleep", "10"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn opskit");

    // Give the process time to install the handler and spawn its child.
    sleep(Duration::from_millis(500));
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).expect("deliver SIGINT");

    let output = child.wait_with_output().expect("collect output");
    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with('\n'),
        "stderr must lead with the separating newline: {stderr:?}"
    );
    assert_eq!(
        stderr.matches("(130) Halted via KeyboardInterrupt.").count(),
        1
    );
}
