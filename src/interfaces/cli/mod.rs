//! CLI interface module
//!
//! One-shot commands that run a single flow against the API and print the
//! outcome. They go through the same flows as the TUI, so validation and
//! user-facing messages are identical.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::client::HttpLinkApi;
use crate::config::StaticConfig;
use crate::flow::FlowError;
use commands::{config_generate, list_links, shorten_url};

#[derive(Debug)]
pub enum CliError {
    /// A flow failed; carries the user-facing message only
    RequestError(String),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::RequestError(msg) => format!("Request error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<FlowError> for CliError {
    fn from(err: FlowError) -> Self {
        CliError::RequestError(err.user_message().to_string())
    }
}

impl From<crate::errors::ShortlinkError> for CliError {
    fn from(err: crate::errors::ShortlinkError) -> Self {
        CliError::ConfigError(err.message())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    let api = || HttpLinkApi::new(&config.api.base_url, config.api.timeout());

    match cmd {
        Commands::Shorten { url } => shorten_url(&api(), url).await,
        Commands::List => list_links(&api(), config.ui.url_truncate_length).await,
        // Generate doesn't talk to the API
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "the TUI is not a one-shot command".to_string(),
        )),
    }
}
