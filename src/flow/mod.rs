//! Request/response flows
//!
//! Each flow is a small state machine:
//!
//! ```text
//! Idle ──trigger──▶ Loading ──▶ Success(payload)
//!                      │
//!                      └──────▶ Failed(FlowError)
//! ```
//!
//! `Success` and `Failed` go back to `Loading` on the next explicit trigger.
//! A trigger while `Loading` is rejected with [`FlowError::InFlight`] and
//! leaves the state untouched, so at most one request per flow is in flight.

mod ack;
mod listing;
mod shorten;

pub use ack::{AckKind, Acknowledgment};
pub use listing::{ListingFlow, ListingView};
pub use shorten::ShortenFlow;

use std::fmt;

pub const VALIDATION_MESSAGE: &str = "Please enter a URL to shorten";
pub const SHORTEN_FAILED_MESSAGE: &str = "Failed to shorten URL. Please try again.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch URL list";
pub const INVALID_FORMAT_MESSAGE: &str = "Received an invalid format from the server";
pub const IN_FLIGHT_MESSAGE: &str = "A request is already in progress";

/// User-facing failure of a flow
///
/// Every variant maps to one fixed message. The diagnostic cause is logged
/// where the failure is recorded and never reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// Empty input, rejected before any request
    Validation,
    /// Shorten request failed for any reason
    ShortenFailed,
    /// Listing request failed in transport or with a non-2xx status
    FetchFailed,
    /// Listing response was not an array of records
    InvalidFormat,
    /// Trigger arrived while the flow was already loading
    InFlight,
}

impl FlowError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FlowError::Validation => VALIDATION_MESSAGE,
            FlowError::ShortenFailed => SHORTEN_FAILED_MESSAGE,
            FlowError::FetchFailed => FETCH_FAILED_MESSAGE,
            FlowError::InvalidFormat => INVALID_FORMAT_MESSAGE,
            FlowError::InFlight => IN_FLIGHT_MESSAGE,
        }
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for FlowError {}

/// Lifecycle of one flow
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failed(FlowError),
}

impl<T> FlowState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            FlowState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<FlowError> {
        match self {
            FlowState::Failed(err) => Some(*err),
            _ => None,
        }
    }
}
