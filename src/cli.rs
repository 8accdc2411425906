//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortlink-console using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_CONFIG_PATH, StaticConfig};
use crate::errors::Result;

/// Shortlink Console - terminal client for a URL shortening service
#[derive(Parser, Debug)]
#[command(name = "shortlink-console")]
#[command(version)]
#[command(about = "Shorten URLs and browse short links from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Override the API base URL (highest priority)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Without a subcommand the TUI starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL and print the short URL
    #[cfg(feature = "cli")]
    Shorten {
        /// The long URL
        url: String,
    },

    /// List all short links with their click counts
    #[cfg(feature = "cli")]
    List,

    /// Manage configuration
    #[cfg(feature = "cli")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Load config (file, then env) and apply the command-line overrides
    pub fn load_config(&self) -> Result<StaticConfig> {
        let mut config = StaticConfig::load(Some(&self.config))?;
        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
