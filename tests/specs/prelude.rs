//! Shared fixtures for CLI specs

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Config with zero-length delays so workflows finish instantly
pub const FAST_CONFIG: &str = r#"
[deploy]
success_probability = 0.9
steps = [
    { name = "Validating Input", duration_ms = 0 },
    { name = "Checking Dependencies", duration_ms = 0 },
    { name = "Installing Packages", duration_ms = 0 },
    { name = "Configuring Bot", duration_ms = 0 },
    { name = "Starting Services", duration_ms = 0 },
]

[timing]
restart = "0s"
update = "0s"
backup = "0s"
logs = "0s"
terminal = "0s"

[monitor]
interval = "10ms"
offline_probability = 0.0
"#;

/// Path to the built `anayat` binary, building it on first use.
///
/// The spec binary lives in `target/<profile>/deps/`, so the CLI binary is
/// two levels up from it.
fn binary() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        let path = target_binary();
        if !path.is_file() {
            let mut build = std::process::Command::new(env!("CARGO"));
            build.args(["build", "--quiet", "-p", "anayat", "--bin", "anayat"]);
            if !cfg!(debug_assertions) {
                build.arg("--release");
            }
            let status = build.status().expect("cargo build");
            assert!(status.success(), "failed to build anayat");
        }
        assert!(path.is_file(), "anayat binary not found at {}", path.display());
        path
    })
}

fn target_binary() -> PathBuf {
    let exe = std::env::current_exe().expect("current exe");
    let mut dir = exe.parent().expect("exe dir").to_path_buf();
    if dir.ends_with("deps") {
        dir.pop();
    }
    dir.join(format!("anayat{}", std::env::consts::EXE_SUFFIX))
}

/// Isolated state directory with a fast config
pub struct StateDir {
    dir: TempDir,
}

impl StateDir {
    pub fn fast() -> Self {
        let state = Self::empty();
        state.file("config.toml", FAST_CONFIG);
        state
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }

    /// `anayat --state-dir <dir>`
    pub fn anayat(&self) -> Cli {
        let mut cmd = Command::new(binary());
        cmd.arg("--state-dir").arg(self.path());
        cmd.env_remove("ANAYAT_STATE_DIR");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    fn run(mut self) -> Output {
        let out = self.cmd.output().unwrap();
        Output {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }

    /// Run and assert exit code 0
    pub fn passes(self) -> Output {
        let out = self.run();
        assert_eq!(out.code, Some(0), "expected success\n{}", out);
        out
    }

    /// Run and assert a non-zero exit code
    pub fn fails(self) -> Output {
        let out = self.run();
        assert_ne!(out.code, Some(0), "expected failure\n{}", out);
        out
    }
}

pub struct Output {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {:?}\n{}", needle, self);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {:?}\n{}", needle, self);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {:?}\n{}", needle, self);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| panic!("bad json: {e}\n{}", self))
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "exit: {:?}", self.code)?;
        writeln!(f, "--- stdout ---\n{}", self.stdout)?;
        write!(f, "--- stderr ---\n{}", self.stderr)
    }
}
