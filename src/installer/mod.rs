//! Link installation
//!
//! The installer prepares the destination directory and creates the alias
//! symlink. It never removes or replaces an existing entry: creating the
//! link is the last step, and any entry already at the link path makes it
//! fail.

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Directory the alias symlink is created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(PathBuf);

impl Destination {
    /// Pick the destination: an explicit override wins, then `home/bin` if it
    /// is a directory, then `home/.local/bin`.
    pub fn resolve(symlink_at: Option<PathBuf>, home: &Path) -> Self {
        symlink_at.map_or_else(|| Self::default_for(home), Self)
    }

    /// Default destination below `home`.
    pub fn default_for(home: &Path) -> Self {
        let bin = home.join("bin");
        if bin.is_dir() {
            Self(bin)
        } else {
            Self(home.join(".local").join("bin"))
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for Destination {
    fn from(dir: PathBuf) -> Self {
        Self(dir)
    }
}

/// Options controlling installation
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Report the link without touching the file system
    pub dry_run: bool,
}

/// The alias symlink, as created (or as it would be created)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledLink {
    /// Path of the symlink itself
    pub link: PathBuf,
    /// Absolute path the symlink points at
    pub target: PathBuf,
}

/// Create `<destination>/<alias>` pointing at `target`.
pub fn install(
    alias: &str,
    target: &Path,
    destination: &Destination,
    options: InstallOptions,
) -> Result<InstalledLink> {
    let dir = destination.path();
    prepare_destination(dir, options)?;

    let link = dir.join(alias);
    let installed = InstalledLink {
        link,
        target: target.to_path_buf(),
    };

    if options.dry_run {
        return Ok(installed);
    }

    create_symlink(&installed.target, &installed.link)
        .map_err(|e| error::installation_failed(&installed.link, &e))?;

    tracing::info!(
        link = %installed.link.display(),
        target = %installed.target.display(),
        "created symlink"
    );
    Ok(installed)
}

fn prepare_destination(dir: &Path, options: InstallOptions) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    // Any other entry, including a dangling symlink, is not a directory.
    if std::fs::symlink_metadata(dir).is_ok() {
        return Err(error::not_a_directory(dir));
    }
    if options.dry_run {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| error::directory_creation_failed(dir, &e))?;
    tracing::debug!(dir = %dir.display(), "created destination directory");
    Ok(())
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
