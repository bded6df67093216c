//! Common test utilities for ctc CLI tests.
//!
//! `TestEnv` owns an isolated project directory and runs the `ctc` binary
//! inside it with a clean `CTC_*` environment and a private config home.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a ctc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory plus config home
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    envs: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            envs: Vec::new(),
        }
    }

    /// A project that has already run `ctc init`
    pub fn initialized() -> Self {
        let env = Self::new();
        let result = env.run(&["init", "-n", "demo"]);
        assert!(result.success, "init failed:\n{}", result.combined_output());
        env
    }

    /// Set an environment variable for every later command
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Run `ctc` with `args` in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ctc"));
        cmd.args(args)
            .current_dir(self.root())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CTC_PROJECT_NAME")
            .env_remove("CTC_BUILD_MODE")
            .env_remove("CTC_CMAKE")
            .env_remove("CTC_KEEP_BUILD");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run ctc");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
