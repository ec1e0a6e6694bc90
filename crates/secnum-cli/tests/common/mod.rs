#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "").expect("write empty config");
            dir
        })
        .path()
}

/// Create a `secnum` command isolated from the user's config and terminal colors.
#[allow(dead_code)]
pub fn secnum_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("secnum"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("SECNUM_CONFIG", config_dir().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `content` to `name` inside `dir` and return the path.
#[allow(dead_code)]
pub fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write markdown fixture");
    path
}
