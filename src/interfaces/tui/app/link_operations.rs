//! Link operations: requests run on background tasks, results come back as actions

use std::time::Instant;

use tracing::{debug, warn};

use super::state::{App, CurrentScreen};
use crate::flow::{AckKind, FlowError};
use crate::interfaces::tui::action::Action;

impl App {
    /// Submit the shorten form
    pub fn submit_shorten(&mut self) {
        let request = match self.shorten.begin_submit() {
            Ok(request) => request,
            Err(FlowError::InFlight) => return,
            Err(e) => {
                debug!("Shorten submit rejected: {}", e);
                return;
            }
        };

        let api = self.api.clone();
        let actions = self.actions.clone();
        tokio::spawn(async move {
            let outcome = api.shorten(&request).await;
            if actions.send(Action::ShortenFinished(outcome)).is_err() {
                warn!("Event loop gone, dropping shorten result");
            }
        });
    }

    /// Switch to the link table; every activation loads the list once
    pub fn activate_links(&mut self) {
        self.current_screen = CurrentScreen::Links;
        self.load_links();
    }

    pub fn load_links(&mut self) {
        if self.listing.begin_load().is_err() {
            return;
        }
        self.selected_index = 0;
        self.scroll_offset = 0;

        let api = self.api.clone();
        let actions = self.actions.clone();
        tokio::spawn(async move {
            let outcome = api.list_urls().await;
            if actions.send(Action::LinksFetched(outcome)).is_err() {
                warn!("Event loop gone, dropping URL list");
            }
        });
    }

    /// Apply a finished request to its flow
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ShortenFinished(outcome) => self.shorten.complete(outcome),
            Action::LinksFetched(outcome) => {
                self.listing.complete(outcome);
                self.selected_index = 0;
                self.scroll_offset = 0;
            }
        }
    }

    /// Copy the freshly shortened URL
    pub fn copy_shortened(&mut self) -> Option<AckKind> {
        self.shorten
            .copy_to_clipboard(self.clipboard.as_mut(), Instant::now())
    }

    /// Copy the short URL of the selected table row
    pub fn copy_selected_link(&mut self) -> Option<AckKind> {
        let short_url = self.selected_record()?.short_url.clone();
        let kind = match self.clipboard.set_text(&short_url) {
            Ok(()) => AckKind::Copied,
            Err(e) => {
                warn!("Failed to copy short URL: {}", e);
                AckKind::CopyFailed
            }
        };
        self.links_ack.show(kind, Instant::now());
        Some(kind)
    }

    /// Expire acknowledgments; true if the screen needs a redraw
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let shorten_changed = self.shorten.tick(now);
        let links_changed = self.links_ack.expire(now);
        shorten_changed || links_changed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use super::*;
    use crate::client::{LinkApi, ShortenRequest, ShortenResult, UrlRecord};
    use crate::clipboard::MemoryClipboard;
    use crate::config::StaticConfig;
    use crate::errors::{Result, ShortlinkError};
    use crate::flow::{FlowState, ListingView};

    #[derive(Default)]
    struct FakeApi {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl LinkApi for FakeApi {
        async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ShortlinkError::http_status(500, ""));
            }
            Ok(ShortenResult::new(format!("https://s/{}", request.long_url.len())))
        }

        async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ShortlinkError::invalid_format("expected a JSON array"));
            }
            Ok(vec![UrlRecord {
                id: "1".into(),
                original_url: "https://example.com".into(),
                short_url: "https://s/1".into(),
                clicks: 3,
            }])
        }
    }

    fn app_with(api: Arc<FakeApi>) -> (App, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            api,
            &StaticConfig::default(),
            tx,
            Box::new(MemoryClipboard::new()),
        );
        (app, rx)
    }

    #[tokio::test]
    async fn test_submit_delivers_result_as_action() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api.clone());

        app.shorten.set_input("https://example.com");
        app.submit_shorten();
        assert!(app.shorten.state().is_loading());
        assert!(app.is_busy());

        let action = rx.recv().await.unwrap();
        app.apply(action);
        assert_eq!(app.shorten.result().unwrap().short_url, "https://s/19");
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_submit_sends_nothing() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api.clone());

        app.submit_shorten();
        assert_eq!(
            app.shorten.state(),
            &FlowState::Failed(FlowError::Validation)
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api.clone());

        app.shorten.set_input("https://example.com");
        app.submit_shorten();
        app.submit_shorten();

        app.apply(rx.recv().await.unwrap());
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_activate_links_loads_list() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api);

        app.activate_links();
        assert_eq!(app.current_screen, CurrentScreen::Links);
        assert_eq!(app.listing.view(), ListingView::Loading);

        app.apply(rx.recv().await.unwrap());
        assert_eq!(app.listing.records().len(), 1);
    }

    #[tokio::test]
    async fn test_listing_format_error() {
        let api = Arc::new(FakeApi {
            fail: true,
            ..FakeApi::default()
        });
        let (mut app, mut rx) = app_with(api);

        app.activate_links();
        app.apply(rx.recv().await.unwrap());
        assert_eq!(
            app.listing.view(),
            ListingView::Failed(FlowError::InvalidFormat)
        );
    }

    #[tokio::test]
    async fn test_copy_selected_link() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api);

        assert_eq!(app.copy_selected_link(), None);

        app.activate_links();
        app.apply(rx.recv().await.unwrap());
        assert_eq!(app.copy_selected_link(), Some(AckKind::Copied));
        assert_eq!(app.clipboard.get_text().unwrap(), "https://s/1");
        assert_eq!(app.links_ack.current(Instant::now()), Some(AckKind::Copied));
    }

    #[tokio::test]
    async fn test_tick_expires_acknowledgment() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api);

        app.shorten.set_input("https://example.com");
        app.submit_shorten();
        app.apply(rx.recv().await.unwrap());
        assert_eq!(app.copy_shortened(), Some(AckKind::Copied));

        let later = Instant::now() + std::time::Duration::from_secs(3);
        assert!(app.on_tick(later));
        assert_eq!(app.shorten.acknowledgment(later), None);
        assert!(!app.on_tick(later));
    }
}
