//! Shared testing utilities for wrapcfg CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `wrapcfg` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wrapcfg").expect("Failed to locate wrapcfg binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to wrap.config.toml in the project directory.
    pub fn toml_path(&self) -> PathBuf {
        self.work_dir.join("wrap.config.toml")
    }

    /// Path to wrap.config.json in the project directory.
    pub fn json_path(&self) -> PathBuf {
        self.work_dir.join("wrap.config.json")
    }

    /// Write a wrap.config.toml with the given content.
    pub fn write_toml(&self, content: &str) {
        fs::write(self.toml_path(), content).expect("Failed to write wrap.config.toml");
    }

    /// Read wrap.config.toml content.
    pub fn read_toml(&self) -> String {
        fs::read_to_string(self.toml_path()).expect("Failed to read wrap.config.toml")
    }

    /// Run `init` with the standard sample identity.
    pub fn init_sample(&self) {
        self.cli()
            .args(["init", "--app-id", "com.sapher.bleapp", "--app-name", "app"])
            .assert()
            .success();
    }
}
