use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use shortlink_console::cli::Cli;
use shortlink_console::config::init_config;
use shortlink_console::runtime::modes::{Mode, detect_mode};
use shortlink_console::system::{RunMode, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 只补充未设置的环境变量
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = detect_mode(cli.command.as_ref());

    let config = match cli.load_config() {
        Ok(config) => init_config(config),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(2);
        }
    };

    let run_mode = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => RunMode::Tui,
        _ => RunMode::Cli,
    };
    let guard = init_logging(&config.logging, run_mode).context("Failed to initialize logging")?;
    debug!("Configuration: {:?}", config);
    info!("shortlink-console v{} using API {}", env!("CARGO_PKG_VERSION"), config.api.base_url);

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            shortlink_console::runtime::modes::run_tui(config)
                .await
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            if let Some(cmd) = cli.command
                && let Err(e) = shortlink_console::runtime::modes::run_cli(cmd, &config).await
            {
                eprintln!("{}", e.format_colored());
                drop(guard);
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            Cli::command().print_help()?;
        }
    }

    drop(guard);
    Ok(())
}
