//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot commands)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on the subcommand
///
/// # Mode Detection Logic
/// 1. `tui` or no subcommand, with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand -> CLI mode
/// 3. Otherwise -> Unknown (no interface compiled in)
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        #[allow(unreachable_patterns)]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
