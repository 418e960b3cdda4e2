// Capability-missing path: without a platform speech backend the binary
// prints a single blocking notice and exits before any UI is wired.
#![cfg(not(windows))]

use std::process::{Command, Stdio};

#[test]
fn missing_backend_notice_fires_once_and_blocks() {
    let output = Command::new(env!("CARGO_BIN_EXE_voice-alert"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to run voice-alert");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr
            .matches("Speech recognition is not available")
            .count(),
        1
    );

    // The start control is never wired: no prompt, no listening status.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Press Enter"));
    assert!(!stdout.contains("Listening"));
}
