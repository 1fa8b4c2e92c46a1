//! Configuration management for the token checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - System spec file discovery

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// File name looked up in each spec directory
pub const SPEC_FILE_NAME: &str = "system-spec.toml";

/// How the result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Command-line arguments for the token checker
#[derive(Debug, Parser)]
#[command(name = "token-check")]
#[command(about = "Validate generated design tokens against system rules and user constraints")]
#[command(version)]
pub struct Args {
    /// Request document with `tokens` and `userConstraints`
    #[arg(long, help = "Request JSON file (reads stdin when omitted)")]
    pub request: Option<PathBuf>,

    /// Custom system constraint spec
    #[arg(long, help = "System constraint spec TOML file")]
    pub spec: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Request file, `None` for stdin
    pub request_path: Option<PathBuf>,
    /// Spec file explicitly set via command line
    pub cli_spec: Option<PathBuf>,
    /// Directories searched for `system-spec.toml`
    pub spec_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut spec_dirs = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            spec_dirs.push(config_dir.join("design-tokens"));
        }

        Ok(Config {
            request_path: args.request,
            cli_spec: args.spec,
            spec_dirs,
            format: args.format,
            log_level: args.log_level,
        })
    }
}
