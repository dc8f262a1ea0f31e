//! Configuration for the `gcode-norm` tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Dialect directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the G-code normalizer
#[derive(Debug, Parser)]
#[command(name = "gcode-norm")]
#[command(about = "Normalize G-code files into canonical command form")]
#[command(version)]
pub struct Args {
    /// G-code file to normalize
    pub file: PathBuf,

    /// Explicitly specify the G-code dialect to use
    #[arg(long, help = "G-code dialect to use (e.g. 'linuxcnc')")]
    pub dialect: Option<String>,

    /// Custom dialect directory to search for dialect files
    #[arg(long, help = "Directory containing dialect TOML files")]
    pub dialect_dir: Option<PathBuf>,

    /// Emit one JSON record per line instead of normalized text
    #[arg(long)]
    pub json: bool,

    /// Skip lines that fail to parse or apply, instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Log level for the normalizer
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file
    pub file: PathBuf,
    /// Dialect name explicitly set via command line
    pub cli_dialect: Option<String>,
    /// Custom dialect directories to search
    pub dialect_dirs: Vec<PathBuf>,
    /// JSON output
    pub json: bool,
    /// Keep going past bad lines
    pub skip_errors: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine dialect directories
        let mut dialect_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.dialect_dir {
            dialect_dirs.push(custom_dir);
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            dialect_dirs.push(config_dir.join("gcode-norm").join("dialects"));
        }

        Ok(Config {
            file: args.file,
            cli_dialect: args.dialect,
            dialect_dirs,
            json: args.json,
            skip_errors: args.skip_errors,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_dialect_dir_is_searched_first() {
        let args = Args {
            file: PathBuf::from("part.gcode"),
            dialect: Some("linuxcnc".to_string()),
            dialect_dir: Some(PathBuf::from("/tmp/dialects")),
            json: false,
            skip_errors: false,
            log_level: "warn".to_string(),
        };
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.dialect_dirs[0], PathBuf::from("/tmp/dialects"));
        assert_eq!(config.cli_dialect.as_deref(), Some("linuxcnc"));
    }
}
