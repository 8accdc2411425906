//! App state definition and basic state management

use std::sync::Arc;

use strum::{AsRefStr, EnumIter};
use tokio::sync::mpsc::UnboundedSender;

use crate::client::LinkApi;
use crate::clipboard::Clipboard;
use crate::config::StaticConfig;
use crate::flow::{Acknowledgment, ListingFlow, ShortenFlow};
use crate::interfaces::tui::action::Action;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum CurrentScreen {
    Shorten,
    Links,
    Help,
    Exiting,
}

impl CurrentScreen {
    /// 可以通过 Tab 切换的主屏幕
    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Shorten | Self::Links)
    }
}

pub struct App {
    pub(super) api: Arc<dyn LinkApi>,
    pub(super) actions: UnboundedSender<Action>,
    pub(super) clipboard: Box<dyn Clipboard + Send>,
    pub api_base: String,

    pub current_screen: CurrentScreen,
    /// Help / Exiting 关闭后返回的屏幕
    pub previous_screen: CurrentScreen,

    pub shorten: ShortenFlow,
    pub listing: ListingFlow,
    /// 列表页复制的提示
    pub links_ack: Acknowledgment,

    // Table state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,

    pub url_truncate_length: usize,
}

impl App {
    pub fn new(
        api: Arc<dyn LinkApi>,
        config: &StaticConfig,
        actions: UnboundedSender<Action>,
        clipboard: Box<dyn Clipboard + Send>,
    ) -> App {
        let ack_duration = config.ui.ack_duration();
        App {
            api,
            actions,
            clipboard,
            api_base: config.api.base_url.clone(),
            current_screen: CurrentScreen::Shorten,
            previous_screen: CurrentScreen::Shorten,
            shorten: ShortenFlow::new(ack_duration),
            listing: ListingFlow::new(),
            links_ack: Acknowledgment::new(ack_duration),
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            url_truncate_length: config.ui.url_truncate_length,
        }
    }

    /// Open an overlay screen (help, exit confirmation) remembering where we were
    pub fn open_overlay(&mut self, screen: CurrentScreen) {
        if self.current_screen.is_tab() {
            self.previous_screen = self.current_screen;
        }
        self.current_screen = screen;
    }

    pub fn close_overlay(&mut self) {
        self.current_screen = self.previous_screen;
    }

    pub fn is_busy(&self) -> bool {
        self.shorten.state().is_loading() || self.listing.state().is_loading()
    }
}
