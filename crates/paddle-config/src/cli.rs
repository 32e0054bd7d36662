//! Command-line arguments for the game bootstrap.

use std::path::PathBuf;

use clap::Parser;

use crate::platform;

/// Paddle game command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "paddle-game", about = "Paddle game")]
pub struct CliArgs {
    /// Directory holding `ConfigurationData.csv` (overrides the default location).
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a default configuration resource if none exists.
    #[arg(long)]
    pub write_default: bool,

    /// Print the loaded configuration as RON.
    #[arg(long)]
    pub print: bool,
}

impl CliArgs {
    /// The assets directory to load from: `--assets-dir` if given, else the
    /// platform default.
    pub fn resolve_assets_dir(&self) -> Option<PathBuf> {
        self.assets_dir
            .clone()
            .or_else(platform::streaming_assets_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "paddle-game",
            "--assets-dir",
            "/opt/paddle/assets",
            "--log-level",
            "debug",
            "--print",
        ]);
        assert_eq!(args.assets_dir, Some(PathBuf::from("/opt/paddle/assets")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print);
        assert!(!args.write_default);
    }

    #[test]
    fn test_no_flags() {
        let args = CliArgs::parse_from(["paddle-game"]);
        assert!(args.assets_dir.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.write_default);
        assert!(!args.print);
    }

    #[test]
    fn test_assets_dir_override() {
        let args = CliArgs {
            assets_dir: Some(PathBuf::from("custom")),
            ..CliArgs::default()
        };
        assert_eq!(args.resolve_assets_dir(), Some(PathBuf::from("custom")));
    }
}
