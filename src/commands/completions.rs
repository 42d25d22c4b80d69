//! Shell completion generation

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

/// Write completions for `shell` to `out`.
pub fn run<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    generate(shell, &mut command, "cache-audit", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_mention_flags() {
        let mut buf = Vec::new();
        run(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("cache-audit"));
        assert!(script.contains("--no-color"));
    }
}
