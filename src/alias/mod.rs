//! Alias derivation and conflict checking
//!
//! The alias of a command is its base name with the characters reversed:
//! `ls` becomes `sl`, `git` becomes `tig`. Before anything is installed the
//! alias is looked up on the search path; if something already answers to
//! it, installation is skipped.

use std::path::{Path, PathBuf};

use crate::resolver::{ResolvedCommand, SearchPath};

/// What the installer should do for a resolved command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Create `alias` pointing at `target`
    Install { alias: String, target: PathBuf },
    /// A command already answers to the alias; `existing` is the base name
    /// of the file it ultimately resolves to
    Skip { existing: String },
}

/// Derive the permuted alias for a command name.
pub fn permute(name: &str) -> String {
    name.chars().rev().collect()
}

/// Compute the alias for `command` and decide whether it can be installed.
pub fn check(command: &ResolvedCommand, search_path: &SearchPath) -> Directive {
    let alias = permute(&command.name);

    match search_path.resolve(&alias) {
        Some(existing) => {
            let existing = shadowed_name(&existing);
            tracing::debug!(%alias, %existing, "alias already resolves to a command");
            Directive::Skip { existing }
        }
        None => {
            tracing::debug!(%alias, target = %command.path.display(), "alias is free");
            Directive::Install {
                alias,
                target: command.path.clone(),
            }
        }
    }
}

/// Base name of the file `path` ends up at once symlinks are followed.
fn shadowed_name(path: &Path) -> String {
    let real = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    real.file_name()
        .or_else(|| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
