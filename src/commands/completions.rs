//! Shell completions

use clap::CommandFactory;

use crate::cli::Cli;

const BIN_NAME: &str = "symlink_permute_cmd";

fn parse_shell(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

/// Write completions for `shell` to `out`. Returns `false` for an unknown
/// shell; clap rejects those before this is reached.
pub fn generate(shell: &str, out: &mut dyn std::io::Write) -> bool {
    let Some(shell) = parse_shell(shell) else {
        return false;
    };

    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
    true
}

/// Print completions for `shell` on stdout
pub fn run(shell: &str) -> bool {
    generate(shell, &mut std::io::stdout().lock())
}
