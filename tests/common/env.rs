//! Test environment for isolated CLI runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{FLAG_OFF, FLAG_ON};

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        super::assertions::parse_ndjson(&self.stdout)
    }
}

/// Temp source directory; the binary runs with it as working directory.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty directory
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_appconfig-synth")),
        }
    }

    /// Directory with `config-v1.json = {"flag": true}` and `config-v2.json = {"flag": false}`
    pub fn with_flags() -> Self {
        Self::with_content(FLAG_ON, FLAG_OFF)
    }

    pub fn with_content(initial: &str, updated: &str) -> Self {
        let env = Self::empty();
        env.write("config-v1.json", initial);
        env.write("config-v2.json", updated);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        self.write_bytes(relative, content.as_bytes());
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).expect("Failed to remove file");
    }

    /// Parsed default template (`synth.out/AppConfigStack.template.json`)
    pub fn template(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(DEFAULT_TEMPLATE)).expect("template is JSON")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("APPCONFIG_SYNTH_STACK_NAME")
            .env_remove("APPCONFIG_SYNTH_ENVIRONMENT")
            .env_remove("APPCONFIG_SYNTH_FORMAT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute appconfig-synth");
        to_result(output)
    }
}

/// Default template location relative to the source directory
pub const DEFAULT_TEMPLATE: &str = "synth.out/AppConfigStack.template.json";

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
