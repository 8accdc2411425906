//! Client layer for the shortener REST API
//!
//! The console never talks HTTP directly: flows hold an `Arc<dyn LinkApi>`,
//! which is [`HttpLinkApi`] in the binary and an in-memory fake in tests.
//!
//! # Endpoints
//!
//! ```text
//! POST {base}/api/shorten   {"longUrl": ...}  → {"shortUrl": ..., ...}
//! GET  {base}/api/urls                        → [{"_id", "originalUrl", "shortUrl", "clicks"}]
//! ```

mod http_client;
mod models;

pub use http_client::{HttpLinkApi, parse_shorten_body, parse_url_list};
pub use models::{ShortenRequest, ShortenResult, UrlRecord};

use async_trait::async_trait;

use crate::errors::Result;

pub const SHORTEN_PATH: &str = "api/shorten";
pub const LIST_PATH: &str = "api/urls";

/// The two operations the console needs from the backend
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Create a short link for `request.long_url`
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult>;

    /// Fetch every short link with its click count, in server order
    async fn list_urls(&self) -> Result<Vec<UrlRecord>>;
}
