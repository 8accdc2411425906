//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::system::{RunMode, panic_handler::install_panic_hook};

/// Run CLI mode
pub async fn run_cli(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    install_panic_hook(RunMode::Cli);
    crate::interfaces::cli::run_cli_command(cmd, config).await
}
