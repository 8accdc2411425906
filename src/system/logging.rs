//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::io::Write;
use std::path::Path;

use tracing_appender::rolling;

use super::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{Result, ShortlinkError};

/// TUI 模式下未配置日志文件时使用的文件
pub const DEFAULT_TUI_LOG_FILE: &str = "shortlink-console.log";

/// Resolve where log lines go for a mode
///
/// The terminal UI owns the screen, so TUI logs always end up in a file.
/// CLI logs go to stderr unless a file is configured, keeping stdout for
/// command output.
pub fn log_target(config: &LoggingConfig, mode: RunMode) -> Option<String> {
    match config.file.as_deref() {
        Some(file) if !file.is_empty() => Some(file.to_string()),
        _ if mode == RunMode::Tui => Some(DEFAULT_TUI_LOG_FILE.to_string()),
        _ => None,
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
    mode: RunMode,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let target = log_target(config, mode);

    let writer: Box<dyn Write + Send + Sync> = match target.as_deref() {
        Some(log_file) if config.enable_rotation => {
            // Use rolling log files
            let path = Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_TUI_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    ShortlinkError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| ShortlinkError::config(format!("Failed to init logging: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_defaults_to_file() {
        let config = LoggingConfig::default();
        assert_eq!(
            log_target(&config, RunMode::Tui).as_deref(),
            Some(DEFAULT_TUI_LOG_FILE)
        );
        assert_eq!(log_target(&config, RunMode::Cli), None);
    }

    #[test]
    fn test_configured_file_wins() {
        let config = LoggingConfig {
            file: Some("logs/console.log".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(
            log_target(&config, RunMode::Cli).as_deref(),
            Some("logs/console.log")
        );
        assert_eq!(
            log_target(&config, RunMode::Tui).as_deref(),
            Some("logs/console.log")
        );
    }

    #[test]
    fn test_empty_file_means_unset() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(log_target(&config, RunMode::Cli), None);
    }
}
