// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_command-gate"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    run_args(&["hook"], stdin_input)
}

pub fn run_hook_with_config(stdin_input: &str, config_content: &str) -> (String, String, i32) {
    let tmpfile = write_config(config_content);
    let config_path = tmpfile.path().to_str().unwrap().to_string();
    run_args(&["hook", "--config", &config_path], stdin_input)
}

pub fn write_config(config_content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp config");
    tmpfile
        .write_all(config_content.as_bytes())
        .expect("failed to write config");
    tmpfile
}

/// Runs the binary with the given args and stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_args(args: &[&str], stdin_input: &str) -> (String, String, i32) {
    run_with(args, stdin_input.as_bytes(), &[])
}

/// Runs `hook` with extra environment variables set on the child.
pub fn run_hook_with_env(stdin_input: &str, envs: &[(&str, &str)]) -> (String, String, i32) {
    run_with(&["hook"], stdin_input.as_bytes(), envs)
}

/// Runs the binary with raw stdin bytes and extra environment variables.
pub fn run_with(args: &[&str], stdin_input: &[u8], envs: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args);
    cmd.envs(envs.iter().copied());
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input);
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn make_input_json(tool_name: &str, tool_input: serde_json::Value) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": "/tmp/test",
        "permission_mode": "default",
        "hook_event_name": "PreToolUse",
        "tool_name": tool_name,
        "tool_input": tool_input,
        "tool_use_id": "toolu_e2e"
    })
    .to_string()
}

pub fn bash_input_json(command: &str) -> String {
    make_input_json("Bash", serde_json::json!({"command": command}))
}

/// The minimal payload shape: only `tool_input.command`.
pub fn command_json(command: &str) -> String {
    serde_json::json!({"tool_input": {"command": command}}).to_string()
}
