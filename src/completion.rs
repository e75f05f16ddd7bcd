//! # Shell Completion Module
//!
//! Completion scripts via clap_complete.
//!
//! ```bash
//! chordclass completion bash > ~/.local/share/bash-completion/completions/chordclass
//! chordclass completion zsh > ~/.config/zsh/completions/_chordclass
//! ```

use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::Write;

/// Write the completion script for `shell` to `out`.
///
/// The binary name is taken from `cmd`, so the script completes whatever
/// name the command was built with.
///
/// # Examples
///
/// ```
/// use chordclass::cli::{Args, Shell};
/// use chordclass::completion::write_completions;
/// use clap::CommandFactory;
///
/// let mut out = Vec::new();
/// write_completions(Shell::Zsh, &mut Args::command(), &mut out);
/// assert!(String::from_utf8(out).unwrap().contains("#compdef chordclass"));
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(to_completion_shell(shell), cmd, name, out);
}

/// Map the CLI's shell choice onto `clap_complete`'s.
pub fn to_completion_shell(shell: Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::CommandFactory;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(to_completion_shell(Shell::Bash), CompletionShell::Bash);
        assert_eq!(to_completion_shell(Shell::Fish), CompletionShell::Fish);
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut cmd = Args::command();
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut cmd, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_chordclass"));
        assert!(script.contains("classify"));
        assert!(script.contains("add-song"));
    }
}
