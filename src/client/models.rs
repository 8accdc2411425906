//! Wire types for the shortener API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// Success body of `POST /api/shorten`
///
/// Only `shortUrl` is read. Any other field the server sends is kept in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortenResult {
    pub fn new(short_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            extra: Map::new(),
        }
    }
}

/// One row of `GET /api/urls`
///
/// The identity may arrive as `_id`, `id` or both; `_id` wins. A missing or
/// null `clicks` counts as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUrlRecord")]
pub struct UrlRecord {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: u64,
}

/// `UrlRecord` as it appears on the wire
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUrlRecord {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    original_url: String,
    short_url: String,
    #[serde(default)]
    clicks: Option<u64>,
}

impl TryFrom<RawUrlRecord> for UrlRecord {
    type Error = String;

    fn try_from(raw: RawUrlRecord) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .or(raw.id)
            .ok_or_else(|| "missing field `_id` or `id`".to_string())?;

        Ok(Self {
            id,
            original_url: raw.original_url,
            short_url: raw.short_url,
            clicks: raw.clicks.unwrap_or(0),
        })
    }
}
