//! Listing flow: every short link with its click count

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use super::{FlowError, FlowState};
use crate::client::{LinkApi, UrlRecord};
use crate::errors::{Result, ShortlinkError};

/// What the listing should render right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    Idle,
    Loading,
    Failed(FlowError),
    /// Loaded, and the server has no links
    Empty,
    Records(&'a [UrlRecord]),
}

#[derive(Debug, Default)]
pub struct ListingFlow {
    state: FlowState<Vec<UrlRecord>>,
    loaded_at: Option<DateTime<Local>>,
}

impl ListingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState<Vec<UrlRecord>> {
        &self.state
    }

    /// Enter `Loading`; the caller fetches and calls [`ListingFlow::complete`]
    pub fn begin_load(&mut self) -> std::result::Result<(), FlowError> {
        if self.state.is_loading() {
            debug!("Listing request already in flight, ignoring reload");
            return Err(FlowError::InFlight);
        }
        self.state = FlowState::Loading;
        Ok(())
    }

    /// Replace the whole list with the outcome of the fetch
    pub fn complete(&mut self, outcome: Result<Vec<UrlRecord>>) {
        if !self.state.is_loading() {
            warn!("Listing result arrived while not loading, applying anyway");
        }

        self.state = match outcome {
            Ok(records) => {
                info!("Loaded {} short links", records.len());
                self.loaded_at = Some(Local::now());
                FlowState::Success(records)
            }
            Err(ShortlinkError::InvalidFormat(detail)) => {
                error!("Invalid URL list format: {}", detail);
                FlowState::Failed(FlowError::InvalidFormat)
            }
            Err(e) => {
                error!("Failed to fetch URL list: {}", e);
                FlowState::Failed(FlowError::FetchFailed)
            }
        };
    }

    /// Run a whole load against `api`
    pub async fn load_all(
        &mut self,
        api: &dyn LinkApi,
    ) -> std::result::Result<&[UrlRecord], FlowError> {
        self.begin_load()?;
        let outcome = api.list_urls().await;
        self.complete(outcome);

        match &self.state {
            FlowState::Success(records) => Ok(records.as_slice()),
            FlowState::Failed(err) => Err(*err),
            FlowState::Idle | FlowState::Loading => Err(FlowError::FetchFailed),
        }
    }

    pub fn view(&self) -> ListingView<'_> {
        match &self.state {
            FlowState::Idle => ListingView::Idle,
            FlowState::Loading => ListingView::Loading,
            FlowState::Failed(err) => ListingView::Failed(*err),
            FlowState::Success(records) if records.is_empty() => ListingView::Empty,
            FlowState::Success(records) => ListingView::Records(records),
        }
    }

    /// Records of the last successful load; empty in every other state
    pub fn records(&self) -> &[UrlRecord] {
        self.state.result().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_clicks(&self) -> u64 {
        self.records().iter().map(|r| r.clicks).sum()
    }

    /// Local time of the last successful load
    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }
}
