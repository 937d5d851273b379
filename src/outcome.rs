//! Result of a successful run
//!
//! Failures are [`PermuteError`](crate::error::PermuteError) values; every
//! other way a run can end is an [`Outcome`]. Only `main` turns either into a
//! process exit status.

use std::fmt;

use crate::installer::InstalledLink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The alias symlink was created
    Installed(InstalledLink),
    /// Dry run: the alias symlink would have been created
    Planned(InstalledLink),
    /// A command already answers to the alias
    Skipped { existing: String },
}

impl Outcome {
    /// Line to print on stdout, if the outcome has one.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Installed(_) => None,
            Outcome::Planned(_) | Outcome::Skipped { .. } => Some(self.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Installed(link) => write!(
                f,
                "Linked '{}' -> '{}'",
                link.link.display(),
                link.target.display()
            ),
            Outcome::Planned(link) => write!(
                f,
                "Would link '{}' -> '{}'",
                link.link.display(),
                link.target.display()
            ),
            Outcome::Skipped { existing } => write!(f, "'{existing}' command exists. Skipping..."),
        }
    }
}
