//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Shells accepted by `--completions`
pub const COMPLETION_SHELLS: [&str; 6] = ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"];

/// symlink_permute_cmd - alias a command under its permuted name
///
/// Resolves a command, reverses its name (`ls` -> `sl`) and installs the
/// reversed name as a symlink to the command.
#[derive(Parser, Debug)]
#[command(
    name = "symlink_permute_cmd",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install a symlink to a command under its permuted name",
    long_about = "Resolves <COMMAND> on PATH (or as a path to an executable), reverses its name \
                  and installs the result as a symlink to the command. Installation is skipped \
                  when a command with the reversed name already exists.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  symlink_permute_cmd ls                 \x1b[90m# ~/bin/sl -> /bin/ls\x1b[0m\n   \
                  symlink_permute_cmd /bin/rm            \x1b[90m# ~/bin/mr -> /bin/rm\x1b[0m\n   \
                  symlink_permute_cmd cp -s /tmp/foo     \x1b[90m# /tmp/foo/pc -> /bin/cp\x1b[0m\n   \
                  symlink_permute_cmd --completions zsh  \x1b[90m# Print zsh completions\x1b[0m\n"
)]
pub struct Cli {
    /// Command name or path to an executable
    #[arg(required_unless_present = "completions")]
    pub command: Option<String>,

    /// Directory to create the symlink in (defaults to ~/bin, else ~/.local/bin)
    #[arg(
        long = "symlink-at",
        short = 's',
        value_name = "DIRECTORY",
        env = "SYMLINK_PERMUTE_CMD_DIR"
    )]
    pub symlink_at: Option<PathBuf>,

    /// Show the symlink that would be created without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(
        long,
        value_name = "SHELL",
        ignore_case = true,
        value_parser = COMPLETION_SHELLS,
        conflicts_with_all = ["command", "dry_run"]
    )]
    pub completions: Option<String>,
}
