//! User interfaces
//!
//! - `cli`: one-shot commands (shorten, list, config generate)
//! - `tui`: interactive terminal UI

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
