//! Common test utilities for triplexq integration tests
//!
//! Provides a helper that spawns the compiled binary with the API base
//! pointed at a mock server, plus a small response wrapper for assertions.

#![allow(dead_code)]

use std::process::{Command, Output, Stdio};

/// Exit status codes matching the application
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// A dummy base URL that should never be resolved (for offline error tests)
pub const DUMMY_BASE: &str = "http://this-should.never-resolve";

/// Result of running the triplexq CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Parse stdout as JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.stdout.trim()).ok()
    }

    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Check if stderr contains a substring
    pub fn stderr_contains(&self, needle: &str) -> bool {
        self.stderr.contains(needle)
    }
}

/// Run the triplexq CLI against the given API base
pub fn triplexq_at(api_base: &str, args: &[&str]) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_triplexq"));
    cmd.args(args);
    cmd.env("TRIPLEXQ_API_BASE", api_base);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to execute triplexq");
    parse_output(output)
}

/// Run the triplexq CLI without touching the network (validation-only paths)
pub fn triplexq(args: &[&str]) -> CliResponse {
    triplexq_at(DUMMY_BASE, args)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}
