//! Command resolution on the search path
//!
//! [`SearchPath::resolve`] is the only lookup used by the tool. It resolves
//! both the command the user asked for and the permuted alias during the
//! conflict check, so the two always agree on what counts as a command
//! (a broken symlink or a file without execute permission never does).

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::{PermuteError, Result};

/// Ordered executable search directories plus the directory that relative
/// path tokens are anchored at.
#[derive(Debug, Clone)]
pub struct SearchPath {
    paths: Option<OsString>,
    cwd: PathBuf,
}

impl SearchPath {
    /// Build from a raw `PATH`-style value.
    ///
    /// Relative entries, including empty ones, name directories below
    /// `cwd` and are anchored there, so every lookup yields an absolute path.
    pub fn new(paths: Option<OsString>, cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let paths = paths.map(|raw| anchor_entries(&raw, &cwd));
        Self { paths, cwd }
    }

    /// Build from explicit directories. Directories that cannot be joined
    /// into a `PATH` value (they contain the separator) leave the search
    /// path empty.
    #[cfg(test)]
    pub fn from_dirs<I, P>(dirs: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<OsStr>,
    {
        Self::new(std::env::join_paths(dirs).ok(), cwd)
    }

    /// Locate an executable by name or path.
    ///
    /// Names containing a path separator are checked directly (relative to
    /// the working directory); bare names are looked up in the search
    /// directories in order. The returned path is absolute and is not
    /// canonicalized, so a symlink found on the search path stays a symlink.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let found = which::which_in(name, self.paths.as_ref(), &self.cwd).ok()?;
        if found.is_absolute() {
            Some(strip_cur_dir(&found))
        } else {
            Some(strip_cur_dir(&self.cwd.join(found)))
        }
    }
}

/// A command token resolved to an executable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Absolute path of the executable
    pub path: PathBuf,
    /// Final path segment, used for alias derivation and messages
    pub name: String,
}

impl ResolvedCommand {
    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, name })
    }
}

/// Resolve the user's command token.
pub fn resolve_command(token: &str, search_path: &SearchPath) -> Result<ResolvedCommand> {
    let resolved = search_path
        .resolve(token)
        .and_then(ResolvedCommand::from_path)
        .ok_or_else(|| PermuteError::CommandNotFound {
            token: token.to_string(),
        })?;

    tracing::debug!(token, path = %resolved.path.display(), "resolved command");
    Ok(resolved)
}

fn anchor_entries(raw: &OsStr, cwd: &Path) -> OsString {
    let dirs = std::env::split_paths(raw).map(|dir| {
        if dir.as_os_str().is_empty() {
            cwd.to_path_buf()
        } else if dir.is_relative() {
            cwd.join(dir)
        } else {
            dir
        }
    });
    // A cwd containing the separator cannot be joined back; keep the raw
    // value and rely on `resolve` anchoring relative results.
    std::env::join_paths(dirs).unwrap_or_else(|_| raw.to_os_string())
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(all(test, unix))]
pub(crate) mod test_support {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable shell script named `name` into `dir`.
    pub fn fake_executable(dir: &Path, name: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}
