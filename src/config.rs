//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use directories::BaseDirs;
use tracing::warn;

use crate::history::HistoryError;

/// Default history file name, relative to the home directory.
pub const FILE_HISTORY: &str = ".bash_history";

/// Interactive shell history picker.
///
/// Type to narrow the history, move with the arrow keys and press Enter to
/// put the chosen command on the shell's command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "rusty-hstr", version, about)]
pub struct Cli {
    /// History file to read [default: ~/.bash_history]
    #[arg(long, env = "HISTFILE", value_name = "PATH")]
    pub histfile: Option<PathBuf>,

    /// Print the selected command to stdout instead of typing it into the terminal
    #[arg(long)]
    pub print: bool,
}

/// How the selected command leaves the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Push it into the terminal's input queue.
    Inject,
    /// Write it to stdout.
    Print,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub histfile: PathBuf,
    pub output: OutputMode,
    /// `user@host$ ` shown in front of the fragment.
    pub prompt: String,
}

impl Config {
    /// Resolve the CLI against the process environment.
    pub fn from_cli(cli: Cli) -> Result<Self, HistoryError> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        let user = std::env::var("USER").ok();
        Self::resolve(cli, home, user, hostname())
    }

    /// Resolve the CLI with explicit environment values.
    pub fn resolve(
        cli: Cli,
        home: Option<PathBuf>,
        user: Option<String>,
        host: String,
    ) -> Result<Self, HistoryError> {
        let histfile = match cli.histfile.filter(|path| !path.as_os_str().is_empty()) {
            Some(path) => path,
            None => home.ok_or(HistoryError::NotConfigured)?.join(FILE_HISTORY),
        };
        let output = if cli.print {
            OutputMode::Print
        } else {
            OutputMode::Inject
        };
        let user = user.unwrap_or_else(|| "user".to_string());

        Ok(Self {
            histfile,
            output,
            prompt: format!("{user}@{host}$ "),
        })
    }
}

fn hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            warn!("Failed to read host name: {}", e);
            "localhost".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["rusty-hstr"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_histfile_wins() {
        let config = Config::resolve(
            cli(&["--histfile", "/tmp/zsh_history"]),
            Some(PathBuf::from("/home/me")),
            Some("me".to_string()),
            "box".to_string(),
        )
        .unwrap();

        assert_eq!(config.histfile, PathBuf::from("/tmp/zsh_history"));
        assert_eq!(config.output, OutputMode::Inject);
    }

    #[test]
    fn test_default_histfile_under_home() {
        let mut args = cli(&[]);
        args.histfile = None;

        let config =
            Config::resolve(args, Some(PathBuf::from("/home/me")), None, "box".to_string()).unwrap();

        assert_eq!(config.histfile, PathBuf::from("/home/me/.bash_history"));
    }

    #[test]
    fn test_missing_home_is_not_configured() {
        let mut args = cli(&[]);
        args.histfile = None;

        let err = Config::resolve(args, None, None, "box".to_string()).unwrap_err();

        assert!(matches!(err, HistoryError::NotConfigured));
    }

    #[test]
    fn test_print_flag() {
        let config = Config::resolve(
            cli(&["--print", "--histfile", "h"]),
            None,
            None,
            "box".to_string(),
        )
        .unwrap();
        assert_eq!(config.output, OutputMode::Print);
    }

    #[test]
    fn test_prompt_label() {
        let config = Config::resolve(
            cli(&["--histfile", "h"]),
            None,
            Some("martin".to_string()),
            "devbox".to_string(),
        )
        .unwrap();
        assert_eq!(config.prompt, "martin@devbox$ ");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["rusty-hstr", "--bogus"]).is_err());
    }
}
