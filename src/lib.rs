//! Shortlink Console - terminal client for a URL shortening service
//!
//! Two flows talk to the shortener API: shortening a long URL, and listing
//! every short link with its click count. Both are available as one-shot
//! CLI commands and in an interactive TUI.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//! - **clipboard**: System clipboard access, pulled in by `tui`
//!
//! # Architecture
//! - `client`: HTTP access to the shortener API
//! - `flow`: Request state machines shared by every interface
//! - `clipboard`: Clipboard abstraction
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod flow;
pub mod interfaces;
pub mod runtime;
pub mod system;
pub mod utils;
