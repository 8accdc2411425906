//! Shortening flow: long URL in, short URL out

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::{AckKind, Acknowledgment, FlowError, FlowState};
use crate::client::{LinkApi, ShortenRequest, ShortenResult};
use crate::clipboard::Clipboard;
use crate::errors::Result;

pub struct ShortenFlow {
    input: String,
    state: FlowState<ShortenResult>,
    ack: Acknowledgment,
}

impl ShortenFlow {
    pub fn new(ack_duration: Duration) -> Self {
        Self {
            input: String::new(),
            state: FlowState::Idle,
            ack: Acknowledgment::new(ack_duration),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.ack.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.ack.clear();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.ack.clear();
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub fn state(&self) -> &FlowState<ShortenResult> {
        &self.state
    }

    pub fn result(&self) -> Option<&ShortenResult> {
        self.state.result()
    }

    /// Validate the input and enter `Loading`
    ///
    /// On success the caller must send the returned request and hand the
    /// outcome to [`ShortenFlow::complete`]. An empty input moves the flow to
    /// `Failed(Validation)` without producing a request.
    pub fn begin_submit(&mut self) -> std::result::Result<ShortenRequest, FlowError> {
        if self.state.is_loading() {
            debug!("Shorten request already in flight, ignoring submit");
            return Err(FlowError::InFlight);
        }

        self.ack.clear();
        let long_url = self.input.trim();
        if long_url.is_empty() {
            self.state = FlowState::Failed(FlowError::Validation);
            return Err(FlowError::Validation);
        }

        let request = ShortenRequest::new(long_url);
        self.state = FlowState::Loading;
        Ok(request)
    }

    /// Record the outcome of the request started by `begin_submit`
    pub fn complete(&mut self, outcome: Result<ShortenResult>) {
        if !self.state.is_loading() {
            warn!("Shorten result arrived while not loading, applying anyway");
        }

        self.state = match outcome {
            Ok(result) => {
                info!("Shortened URL: {}", result.short_url);
                FlowState::Success(result)
            }
            Err(e) => {
                error!("Failed to shorten URL: {}", e);
                FlowState::Failed(FlowError::ShortenFailed)
            }
        };
    }

    /// Run a whole submission against `api`
    pub async fn submit(
        &mut self,
        api: &dyn LinkApi,
    ) -> std::result::Result<ShortenResult, FlowError> {
        let request = self.begin_submit()?;
        let outcome = api.shorten(&request).await;
        self.complete(outcome);

        match &self.state {
            FlowState::Success(result) => Ok(result.clone()),
            FlowState::Failed(err) => Err(*err),
            FlowState::Idle | FlowState::Loading => Err(FlowError::ShortenFailed),
        }
    }

    /// Copy the short URL of the current result
    ///
    /// Returns `None` when there is no result to copy.
    pub fn copy_to_clipboard(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Option<AckKind> {
        let short_url = self.state.result()?.short_url.clone();
        let kind = match clipboard.set_text(&short_url) {
            Ok(()) => AckKind::Copied,
            Err(e) => {
                warn!("Failed to copy short URL: {}", e);
                AckKind::CopyFailed
            }
        };
        self.ack.show(kind, now);
        Some(kind)
    }

    pub fn acknowledgment(&self, now: Instant) -> Option<AckKind> {
        self.ack.current(now)
    }

    /// Revert the acknowledgment once it expired; true if something changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.ack.expire(now)
    }
}
