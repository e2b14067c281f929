//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::rules::DEFAULT_PROVIDERS_FILE;

/// envswitch - Environment-detected settings overrides.
#[derive(Debug, Parser)]
#[command(name = "envswitch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the providers file
    #[arg(
        short,
        long,
        global = true,
        env = "ENVSWITCH_PROVIDERS",
        default_value = DEFAULT_PROVIDERS_FILE
    )]
    pub providers: PathBuf,

    /// Let environment variables override every environment
    #[arg(long, global = true)]
    pub environ_trump: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a single setting
    Get(GetArgs),

    /// Show the detected environment and its settings
    Show(ShowArgs),

    /// Report which environments match this machine
    Detect,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GetArgs {
    /// Setting name
    pub name: String,

    /// Production value used when no environment supplies the setting
    /// (parsed as JSON when possible)
    #[arg(short, long)]
    pub fallback: Option<String>,

    /// Print the value as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_parses_name_and_fallback() {
        let cli = Cli::parse_from(["envswitch", "get", "HOST", "--fallback", "127.0.0.1"]);
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.name, "HOST");
                assert_eq!(args.fallback.as_deref(), Some("127.0.0.1"));
                assert!(!args.json);
            }
            other => panic!("Expected Get command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "envswitch",
            "show",
            "--json",
            "--providers",
            "conf/envs.yml",
            "--environ-trump",
            "--debug",
        ]);
        assert_eq!(cli.providers, PathBuf::from("conf/envs.yml"));
        assert!(cli.environ_trump);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Show(ShowArgs { json: true })));
    }

    #[test]
    fn detect_takes_no_arguments() {
        let cli = Cli::parse_from(["envswitch", "detect"]);
        assert!(matches!(cli.command, Commands::Detect));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["envswitch"]).is_err());
    }
}
