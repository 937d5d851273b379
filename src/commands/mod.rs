//! Command implementations for the symlink_permute_cmd CLI

pub mod completions;
pub mod permute;
