//! Error types and handling for symlink_permute_cmd
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! The `Display` text of every variant is the exact line written to stderr,
//! so messages carry no prefix and no trailing punctuation beyond what users
//! see. The exit status for each variant lives in [`PermuteError::exit_code`].
//!
//! Sub-modules:
//! - [`fs`]: constructors for file system failures

pub mod fs;

pub use fs::{
    directory_creation_failed, installation_failed, not_a_directory, working_dir_unavailable,
};

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for an unresolvable command, as used by POSIX shells.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Exit status for generic failures.
pub const EXIT_FAILURE: i32 = 1;

/// Main error type for symlink_permute_cmd operations
#[derive(Error, Diagnostic, Debug)]
pub enum PermuteError {
    #[error("{token}: command not found")]
    #[diagnostic(
        code(permute::resolve::command_not_found),
        help("Pass a command available on PATH or a path to an executable file")
    )]
    CommandNotFound { token: String },

    #[error("{}: Specified symlink at path exists but is not a directory", .path.display())]
    #[diagnostic(
        code(permute::install::not_a_directory),
        help("Pass a directory (or a path that does not exist yet) to -s")
    )]
    DestinationNotADirectory { path: PathBuf },

    #[error("{}: failed to create symlink: {reason}", .path.display())]
    #[diagnostic(code(permute::install::failed))]
    InstallationFailed { path: PathBuf, reason: String },

    #[error("{}: failed to create directory: {reason}", .path.display())]
    #[diagnostic(code(permute::install::create_dir))]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    #[error("cannot determine current directory: {reason}")]
    #[diagnostic(
        code(permute::config::cwd_unavailable),
        help("Run from an existing directory")
    )]
    WorkingDirUnavailable { reason: String },

    #[error("cannot determine home directory; use -s <directory>")]
    #[diagnostic(
        code(permute::config::home_unavailable),
        help("Set HOME or pass an explicit destination with -s")
    )]
    HomeDirUnavailable,
}

impl PermuteError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PermuteError::CommandNotFound { .. } => EXIT_COMMAND_NOT_FOUND,
            PermuteError::DestinationNotADirectory { .. } => not_a_directory_code(),
            PermuteError::InstallationFailed { .. }
            | PermuteError::DirectoryCreationFailed { .. }
            | PermuteError::WorkingDirUnavailable { .. }
            | PermuteError::HomeDirUnavailable => EXIT_FAILURE,
        }
    }
}

#[cfg(unix)]
fn not_a_directory_code() -> i32 {
    nix::errno::Errno::ENOTDIR as i32
}

#[cfg(not(unix))]
fn not_a_directory_code() -> i32 {
    20
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PermuteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_not_found_display() {
        let err = PermuteError::CommandNotFound {
            token: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "foo: command not found");
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn test_not_a_directory_display() {
        let err = not_a_directory("/tmp/bar");
        assert_eq!(
            err.to_string(),
            "/tmp/bar: Specified symlink at path exists but is not a directory"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_not_a_directory_exit_code_is_enotdir() {
        assert_eq!(not_a_directory("/tmp/bar").exit_code(), 20);
    }

    #[test]
    fn test_installation_failed_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = installation_failed("/tmp/dest/sl", &io_err);
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(err.to_string().starts_with("/tmp/dest/sl: failed to create symlink"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_directory_creation_failed_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = directory_creation_failed("/tmp/dest", &io_err);
        assert_eq!(err.to_string(), "/tmp/dest: failed to create directory: denied");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_working_dir_unavailable_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = working_dir_unavailable(&io_err);
        assert_eq!(err.to_string(), "cannot determine current directory: gone");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_home_unavailable_exit_code() {
        assert_eq!(PermuteError::HomeDirUnavailable.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_error_code() {
        let err = PermuteError::CommandNotFound {
            token: "foo".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("permute::resolve::command_not_found".to_string())
        );
    }
}
