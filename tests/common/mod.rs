//! Shared test infrastructure for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A scratch pair of ledgers plus an isolated config home.
pub struct Ledgers {
    pub dir: TempDir,
    pub pending: PathBuf,
    pub served: PathBuf,
}

impl Ledgers {
    pub fn scratch() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pending = dir.path().join("orders.json");
        let served = dir.path().join("output_orders.json");
        Self {
            dir,
            pending,
            served,
        }
    }

    /// `odesk` with no ledger flags and no inherited ledger env vars.
    pub fn bare_command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_odesk"));
        command
            .current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config-home"))
            .env("HOME", self.dir.path())
            .env_remove("ODESK_PENDING")
            .env_remove("ODESK_SERVED")
            .env_remove("RUST_LOG");
        command
    }

    /// `odesk` pointed at this fixture's ledgers.
    pub fn command(&self) -> Command {
        let mut command = self.bare_command();
        command
            .arg("--pending-file")
            .arg(&self.pending)
            .arg("--served-file")
            .arg(&self.served);
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run odesk")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn odesk");
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).expect("write stdin");
        }
        child.wait_with_output().expect("wait for odesk")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn read_ledger(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read ledger");
    serde_json::from_str(&text).expect("parse ledger")
}
