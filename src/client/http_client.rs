//! HTTP implementation of [`LinkApi`] backed by ureq
//!
//! ureq is blocking, so every call runs inside `spawn_blocking` and the
//! caller's task is free while the request is in flight.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};
use ureq::Agent;

use super::models::{ShortenRequest, ShortenResult, UrlRecord};
use super::{LIST_PATH, LinkApi, SHORTEN_PATH};
use crate::errors::{Result, ShortlinkError};

/// 错误响应体在诊断信息中保留的最大长度
const MAX_ERROR_BODY_LEN: usize = 256;

/// Shortener API over HTTP
#[derive(Clone)]
pub struct HttpLinkApi {
    base_url: String,
    agent: Agent,
}

impl HttpLinkApi {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `api/urls`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn post_shorten_sync(
        agent: &Agent,
        url: &str,
        request: &ShortenRequest,
    ) -> Result<ShortenResult> {
        let resp = agent
            .post(url)
            .header("Accept", "application/json")
            .send_json(request)?;
        let body = read_success_body(resp)?;
        parse_shorten_body(&body)
    }

    fn get_urls_sync(agent: &Agent, url: &str) -> Result<Vec<UrlRecord>> {
        let resp = agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;
        let body = read_success_body(resp)?;
        parse_url_list(&body)
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult> {
        let agent = self.agent.clone();
        let url = self.endpoint(SHORTEN_PATH);
        let request = request.clone();
        debug!("POST {}", url);

        tokio::task::spawn_blocking(move || Self::post_shorten_sync(&agent, &url, &request))
            .await?
    }

    async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
        let agent = self.agent.clone();
        let url = self.endpoint(LIST_PATH);
        debug!("GET {}", url);

        tokio::task::spawn_blocking(move || Self::get_urls_sync(&agent, &url)).await?
    }
}

/// Read the body of a 2xx response, or turn any other status into an error
fn read_success_body(resp: ureq::http::Response<ureq::Body>) -> Result<String> {
    let status = resp.status();
    trace!("Response status: {}", status);

    if !status.is_success() {
        let mut body = resp.into_body().read_to_string().unwrap_or_default();
        if body.len() > MAX_ERROR_BODY_LEN {
            let mut cut = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        return Err(ShortlinkError::http_status(status.as_u16(), body));
    }

    Ok(resp.into_body().read_to_string()?)
}

/// Parse a shorten response body; anything without a string `shortUrl` is a format error
pub fn parse_shorten_body(body: &str) -> Result<ShortenResult> {
    serde_json::from_str(body)
        .map_err(|e| ShortlinkError::invalid_format(format!("shorten response: {}", e)))
}

/// Parse a listing response body; the top level must be a JSON array
pub fn parse_url_list(body: &str) -> Result<Vec<UrlRecord>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ShortlinkError::invalid_format(format!("listing response: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(ShortlinkError::invalid_format(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                ShortlinkError::invalid_format(format!("listing entry {}: {}", index, e))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = HttpLinkApi::new("http://localhost:5000/", Duration::from_secs(1));
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.endpoint(SHORTEN_PATH), "http://localhost:5000/api/shorten");
        assert_eq!(api.endpoint("/api/urls"), "http://localhost:5000/api/urls");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpLinkApi::new("https://example.com/short", Duration::from_secs(1));
        assert_eq!(api.endpoint(LIST_PATH), "https://example.com/short/api/urls");
    }

    #[test]
    fn test_parse_shorten_body() {
        let result = parse_shorten_body(r#"{"shortUrl":"https://s/abc","clicks":0}"#).unwrap();
        assert_eq!(result.short_url, "https://s/abc");
    }

    #[test]
    fn test_parse_shorten_body_malformed() {
        let err = parse_shorten_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ShortlinkError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_url_list_empty() {
        assert!(parse_url_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_url_list_keeps_server_order() {
        let body = r#"[
            {"_id":"b","originalUrl":"https://b.example","shortUrl":"https://s/b","clicks":1},
            {"_id":"a","originalUrl":"https://a.example","shortUrl":"https://s/a","clicks":9}
        ]"#;
        let ids: Vec<String> = parse_url_list(body)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_url_list_accepts_id_and_underscore_id_together() {
        let body = r#"[
            {"_id":"65f0","id":"65f0","originalUrl":"https://e.com","shortUrl":"https://s/a","clicks":1},
            {"_id":"65f1","originalUrl":"https://f.com","shortUrl":"https://s/b","clicks":null}
        ]"#;
        let records = parse_url_list(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "65f0");
        assert_eq!(records[1].clicks, 0);
    }

    #[test]
    fn test_parse_url_list_object_is_format_error() {
        let err = parse_url_list(r#"{"urls":[]}"#).unwrap_err();
        match err {
            ShortlinkError::InvalidFormat(msg) => assert!(msg.contains("an object"), "{}", msg),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_url_list_bad_entry_is_format_error() {
        let err = parse_url_list(r#"[{"id":"1"}]"#).unwrap_err();
        match err {
            ShortlinkError::InvalidFormat(msg) => assert!(msg.contains("entry 0"), "{}", msg),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_url_list_not_json() {
        assert!(matches!(
            parse_url_list("Service Unavailable"),
            Err(ShortlinkError::InvalidFormat(_))
        ));
    }
}
