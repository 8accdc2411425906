//! Panic handler module
//!
//! - CLI mode: simple message, details in crash.log
//! - TUI mode: restore the terminal first so the message is readable

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

pub const CRASH_LOG_FILE: &str = "crash.log";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
///
/// The previously installed hook still runs afterwards, so a report printer
/// installed earlier (color-eyre in TUI mode) keeps working.
pub fn install_panic_hook(mode: RunMode) {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if mode == RunMode::Tui {
            #[cfg(feature = "tui")]
            crate::interfaces::tui::restore_terminal();
        }

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        display_simple_panic(&message);
        previous_hook(panic_info);
    }));
}

fn display_simple_panic(message: &str) {
    use colored::Colorize;

    eprintln!();
    eprintln!("{} {}", "Program panicked:".red().bold(), message);
    eprintln!("Details saved to {}, please check the log file", CRASH_LOG_FILE);
    eprintln!();
}

/// Write crash log
fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CRASH_LOG_FILE)?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
