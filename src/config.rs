//! Run configuration
//!
//! Everything the pipeline needs from the process environment is collected
//! here, once, so the resolver, checker and installer only ever see explicit
//! values.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{self, PermuteError, Result};
use crate::installer::{Destination, InstallOptions};
use crate::resolver::SearchPath;

/// Inputs of a single run
#[derive(Debug, Clone)]
pub struct Settings {
    pub search_path: SearchPath,
    pub home: Option<PathBuf>,
    pub symlink_at: Option<PathBuf>,
    pub dry_run: bool,
}

impl Settings {
    /// Read `PATH`, the working directory and the home directory from the
    /// process, and take the rest from the command line.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        Self::new(
            cli,
            std::env::var_os("PATH"),
            std::env::current_dir(),
            dirs::home_dir(),
        )
    }

    fn new(
        cli: &Cli,
        path: Option<OsString>,
        cwd: std::io::Result<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        let cwd = cwd.map_err(|e| error::working_dir_unavailable(&e))?;
        Ok(Self {
            search_path: SearchPath::new(path, cwd),
            home,
            symlink_at: cli.symlink_at.clone(),
            dry_run: cli.dry_run,
        })
    }

    /// Destination for the symlink; the home directory is only required when
    /// no explicit directory was given.
    pub fn destination(&self) -> Result<Destination> {
        match (&self.symlink_at, &self.home) {
            (symlink_at, Some(home)) => Ok(Destination::resolve(symlink_at.clone(), home)),
            (Some(dir), None) => Ok(Destination::from(dir.clone())),
            (None, None) => Err(PermuteError::HomeDirUnavailable),
        }
    }

    pub fn install_options(&self) -> InstallOptions {
        InstallOptions {
            dry_run: self.dry_run,
        }
    }
}
