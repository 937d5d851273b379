//! Common test utilities for symlink_permute_cmd integration tests

use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway environment: fake system binaries, a home directory and a
/// scratch area, all under one temporary directory.
pub struct TestEnv {
    pub temp: TempDir,
    /// Directory holding fake system executables
    pub bin: PathBuf,
    /// `$HOME` for the binary under test
    pub home: PathBuf,
    /// Free space for `-s` destinations
    pub scratch: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bin = temp.path().join("usr-bin");
        let home = temp.path().join("home");
        let scratch = temp.path().join("scratch");
        for dir in [&bin, &home, &scratch] {
            std::fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        Self {
            temp,
            bin,
            home,
            scratch,
        }
    }

    /// Create an executable named `name` among the fake system binaries
    pub fn add_executable(&self, name: &str) -> PathBuf {
        write_executable(&self.bin, name)
    }

    /// `$HOME/.local/bin`, the default destination when `$HOME/bin` is absent
    pub fn local_bin(&self) -> PathBuf {
        self.home.join(".local").join("bin")
    }

    /// Command for the real binary with `PATH` set to the fake system
    /// binaries followed by `extra_path`
    pub fn cmd_with_path(&self, extra_path: &[&Path]) -> Command {
        let mut dirs = vec![self.bin.as_path()];
        dirs.extend_from_slice(extra_path);
        let path = std::env::join_paths(dirs).expect("Failed to join PATH");
        self.cmd_with_raw_path(path)
    }

    /// Command for the real binary with `PATH` set verbatim, run from the
    /// temporary directory
    pub fn cmd_with_raw_path(&self, path: impl AsRef<OsStr>) -> Command {
        let mut cmd = symlink_permute_cmd();
        cmd.env("PATH", path)
            .env("HOME", &self.home)
            .env_remove("SYMLINK_PERMUTE_CMD_DIR")
            .env_remove("SYMLINK_PERMUTE_CMD_LOG")
            .current_dir(self.temp.path());
        cmd
    }

    /// Command whose `PATH` also covers both default destinations, so
    /// installed aliases are visible to later runs
    pub fn cmd(&self) -> Command {
        let home_bin = self.home.join("bin");
        let local_bin = self.local_bin();
        self.cmd_with_path(&[home_bin.as_path(), local_bin.as_path()])
    }
}

pub fn write_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(dir).expect("Failed to create directory");
    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").expect("Failed to write executable");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to set permissions");
    path
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn symlink_permute_cmd() -> Command {
    Command::cargo_bin("symlink_permute_cmd").expect("Failed to find binary")
}
