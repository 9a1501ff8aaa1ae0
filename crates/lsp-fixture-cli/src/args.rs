//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// User-record fixture for editor language-server testing
///
/// Builds two users, prints their descriptions and the first user's age
/// as a string.
#[derive(Debug, Parser)]
#[command(name = "lsp-fixture")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to a file with the user inputs
    ///
    /// If not specified, searches for lsp-fixture.toml in:
    /// 1. Current directory
    /// 2. ~/.config/lsp-fixture/lsp-fixture.toml
    ///
    /// and falls back to built-in inputs.
    #[arg(short, long, value_name = "FILE", env = "LSP_FIXTURE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn", env = "LSP_FIXTURE_LOG")]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "LSP_FIXTURE_LOG_JSON")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["lsp-fixture"]);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
        assert!(!args.log_json);
    }

    #[test]
    fn test_config_arg() {
        let args = Args::parse_from(["lsp-fixture", "--config", "/path/to/lsp-fixture.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/path/to/lsp-fixture.toml")));
    }

    #[test]
    fn test_log_level_arg() {
        let args = Args::parse_from(["lsp-fixture", "-l", "debug", "--log-json"]);
        assert_eq!(args.log_level, "debug");
        assert!(args.log_json);
    }
}
