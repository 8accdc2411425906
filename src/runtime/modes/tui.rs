//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use std::sync::Arc;

use crate::client::{HttpLinkApi, LinkApi};
use crate::config::StaticConfig;
use crate::system::{RunMode, panic_handler::install_panic_hook};

/// Run TUI mode
///
/// color-eyre goes first so the crash hook installed after it can restore
/// the terminal before its report is printed.
pub async fn run_tui(config: Arc<StaticConfig>) -> color_eyre::Result<()> {
    color_eyre::install()?;
    install_panic_hook(RunMode::Tui);

    let api: Arc<dyn LinkApi> = Arc::new(HttpLinkApi::new(
        &config.api.base_url,
        config.api.timeout(),
    ));
    crate::interfaces::tui::run_tui(api, &config).await
}
