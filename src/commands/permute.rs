//! Permute command implementation
//!
//! The pipeline of a run:
//! 1. Resolve the command token on the search path
//! 2. Derive the alias and check whether a command already answers to it
//! 3. Pick the destination and create the symlink there

use crate::alias::{self, Directive};
use crate::config::Settings;
use crate::error::Result;
use crate::installer;
use crate::outcome::Outcome;
use crate::resolver;

/// Alias `token` under its permuted name.
pub fn run(token: &str, settings: &Settings) -> Result<Outcome> {
    let command = resolver::resolve_command(token, &settings.search_path)?;

    let (alias, target) = match alias::check(&command, &settings.search_path) {
        Directive::Skip { existing } => return Ok(Outcome::Skipped { existing }),
        Directive::Install { alias, target } => (alias, target),
    };

    let destination = settings.destination()?;
    tracing::debug!(destination = %destination.path().display(), "installing alias");

    let options = settings.install_options();
    let link = installer::install(&alias, &target, &destination, options)?;

    Ok(if options.dry_run {
        Outcome::Planned(link)
    } else {
        Outcome::Installed(link)
    })
}
