//! File system errors

use std::path::Path;

use super::PermuteError;

/// Destination exists but is not a directory
pub fn not_a_directory(path: impl AsRef<Path>) -> PermuteError {
    PermuteError::DestinationNotADirectory {
        path: path.as_ref().to_path_buf(),
    }
}

/// Creating the destination directory failed
pub fn directory_creation_failed(path: impl AsRef<Path>, err: &std::io::Error) -> PermuteError {
    PermuteError::DirectoryCreationFailed {
        path: path.as_ref().to_path_buf(),
        reason: err.to_string(),
    }
}

/// The process working directory cannot be read
pub fn working_dir_unavailable(err: &std::io::Error) -> PermuteError {
    PermuteError::WorkingDirUnavailable {
        reason: err.to_string(),
    }
}

/// Creating the link itself failed
pub fn installation_failed(path: impl AsRef<Path>, err: &std::io::Error) -> PermuteError {
    PermuteError::InstallationFailed {
        path: path.as_ref().to_path_buf(),
        reason: err.to_string(),
    }
}
