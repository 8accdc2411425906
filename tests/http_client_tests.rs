//! HttpLinkApi tests against a local actix-web server
//!
//! Each test starts a real HTTP server on an ephemeral port. Scenarios are
//! selected by a path prefix in the base URL, e.g. `http://127.0.0.1:N/broken`.

use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use shortlink_console::client::{HttpLinkApi, LinkApi, ShortenRequest};
use shortlink_console::errors::ShortlinkError;
use shortlink_console::flow::{FlowError, FlowState, ListingFlow, ListingView, ShortenFlow};

// =============================================================================
// Mock server
// =============================================================================

type Received = web::Data<Mutex<Vec<Value>>>;

struct MockServer {
    addr: String,
    handle: ServerHandle,
    received: Received,
}

impl MockServer {
    fn api(&self, scenario: &str) -> HttpLinkApi {
        HttpLinkApi::new(
            &format!("http://{}/{}", self.addr, scenario),
            Duration::from_secs(1),
        )
    }

    fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn shorten_ok(received: Received, body: web::Json<Value>) -> HttpResponse {
    received.lock().unwrap().push(body.0.clone());
    HttpResponse::Ok().json(json!({
        "shortUrl": "https://s/abc",
        "longUrl": body.0["longUrl"],
        "createdAt": "2026-10-18T12:00:00Z"
    }))
}

async fn shorten_broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("database exploded")
}

async fn shorten_wrong_shape() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "url": "https://s/abc" }))
}

async fn shorten_slow() -> HttpResponse {
    actix_rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(json!({ "shortUrl": "https://s/late" }))
}

async fn urls_ok() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "_id": "65f0c1",
            "originalUrl": "https://example.com/first",
            "shortUrl": "https://s/1",
            "clicks": 7,
            "__v": 0
        },
        {
            "id": "65f0c2",
            "originalUrl": "https://example.com/second",
            "shortUrl": "https://s/2"
        },
        {
            "_id": "65f0c3",
            "id": "65f0c3",
            "originalUrl": "https://example.com/third",
            "shortUrl": "https://s/3",
            "clicks": null
        }
    ]))
}

async fn urls_empty() -> HttpResponse {
    HttpResponse::Ok().json(json!([]))
}

async fn urls_object() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "urls": [] }))
}

async fn urls_bad_entry() -> HttpResponse {
    HttpResponse::Ok().json(json!([{ "id": "1", "shortUrl": "https://s/1" }]))
}

async fn urls_broken() -> HttpResponse {
    HttpResponse::ServiceUnavailable().finish()
}

async fn start_mock_server() -> MockServer {
    let received: Received = web::Data::new(Mutex::new(Vec::new()));
    let data = received.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/ok/api/shorten", web::post().to(shorten_ok))
            .route("/ok/api/urls", web::get().to(urls_ok))
            .route("/broken/api/shorten", web::post().to(shorten_broken))
            .route("/broken/api/urls", web::get().to(urls_broken))
            .route("/weird/api/shorten", web::post().to(shorten_wrong_shape))
            .route("/slow/api/shorten", web::post().to(shorten_slow))
            .route("/empty/api/urls", web::get().to(urls_empty))
            .route("/object/api/urls", web::get().to(urls_object))
            .route("/bad-entry/api/urls", web::get().to(urls_bad_entry))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0].to_string();
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);

    MockServer {
        addr,
        handle,
        received,
    }
}

// =============================================================================
// Shorten endpoint
// =============================================================================

#[actix_rt::test]
async fn test_shorten_success_sends_long_url() {
    let server = start_mock_server().await;
    let api = server.api("ok");

    let result = api
        .shorten(&ShortenRequest::new("https://example.com"))
        .await
        .unwrap();
    assert_eq!(result.short_url, "https://s/abc");
    // extra fields are kept
    assert_eq!(result.extra["longUrl"], "https://example.com");
    assert!(result.extra.contains_key("createdAt"));

    assert_eq!(
        server.received(),
        vec![json!({ "longUrl": "https://example.com" })]
    );
    server.stop().await;
}

#[actix_rt::test]
async fn test_shorten_flow_success() {
    let server = start_mock_server().await;
    let api = server.api("ok");

    let mut flow = ShortenFlow::new(Duration::from_secs(2));
    flow.set_input("https://example.com");
    let result = flow.submit(&api).await.unwrap();

    assert_eq!(result.short_url, "https://s/abc");
    assert_eq!(flow.result().unwrap().short_url, "https://s/abc");
    assert!(flow.state().error().is_none());
    server.stop().await;
}

#[actix_rt::test]
async fn test_shorten_http_500() {
    let server = start_mock_server().await;
    let api = server.api("broken");

    let err = api
        .shorten(&ShortenRequest::new("https://example.com"))
        .await
        .unwrap_err();
    match err {
        ShortlinkError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database exploded");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }

    let mut flow = ShortenFlow::new(Duration::from_secs(2));
    flow.set_input("https://example.com");
    assert_eq!(flow.submit(&api).await, Err(FlowError::ShortenFailed));
    assert_eq!(flow.state(), &FlowState::Failed(FlowError::ShortenFailed));
    assert!(flow.result().is_none());
    server.stop().await;
}

#[actix_rt::test]
async fn test_shorten_missing_short_url() {
    let server = start_mock_server().await;
    let api = server.api("weird");

    let err = api
        .shorten(&ShortenRequest::new("https://example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ShortlinkError::InvalidFormat(_)));
    server.stop().await;
}

#[actix_rt::test]
async fn test_empty_input_sends_nothing() {
    let server = start_mock_server().await;
    let api = server.api("ok");

    let mut flow = ShortenFlow::new(Duration::from_secs(2));
    flow.set_input("  ");
    assert_eq!(flow.submit(&api).await, Err(FlowError::Validation));
    assert!(server.received().is_empty());
    server.stop().await;
}

#[actix_rt::test]
async fn test_timeout_ends_loading() {
    let server = start_mock_server().await;
    let api = server.api("slow");

    let mut flow = ShortenFlow::new(Duration::from_secs(2));
    flow.set_input("https://example.com");
    assert_eq!(flow.submit(&api).await, Err(FlowError::ShortenFailed));
    assert!(!flow.state().is_loading());
    server.stop().await;
}

#[actix_rt::test]
async fn test_connection_refused() {
    // Bind then drop, so nothing listens on the port
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let api = HttpLinkApi::new(&format!("http://{}", addr), Duration::from_secs(1));

    let err = api.list_urls().await.unwrap_err();
    assert!(matches!(err, ShortlinkError::Network(_)));

    let mut flow = ListingFlow::new();
    assert_eq!(flow.load_all(&api).await, Err(FlowError::FetchFailed));
}

// =============================================================================
// Listing endpoint
// =============================================================================

#[actix_rt::test]
async fn test_list_keeps_server_order_and_every_id_form() {
    let server = start_mock_server().await;
    let api = server.api("ok");

    let records = api.list_urls().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "65f0c1");
    assert_eq!(records[0].clicks, 7);
    assert_eq!(records[1].id, "65f0c2");
    assert_eq!(records[1].clicks, 0);
    // both identity keys, null clicks
    assert_eq!(records[2].id, "65f0c3");
    assert_eq!(records[2].clicks, 0);
    server.stop().await;
}

#[actix_rt::test]
async fn test_list_empty_array() {
    let server = start_mock_server().await;
    let api = server.api("empty");

    let mut flow = ListingFlow::new();
    assert!(flow.load_all(&api).await.unwrap().is_empty());
    assert_eq!(flow.view(), ListingView::Empty);
    server.stop().await;
}

#[actix_rt::test]
async fn test_list_object_is_format_error() {
    let server = start_mock_server().await;
    let api = server.api("object");

    let err = api.list_urls().await.unwrap_err();
    assert!(matches!(err, ShortlinkError::InvalidFormat(_)));

    let mut flow = ListingFlow::new();
    assert_eq!(flow.load_all(&api).await, Err(FlowError::InvalidFormat));
    assert_eq!(flow.view(), ListingView::Failed(FlowError::InvalidFormat));
    assert!(flow.records().is_empty());
    server.stop().await;
}

#[actix_rt::test]
async fn test_list_bad_entry_is_format_error() {
    let server = start_mock_server().await;
    let api = server.api("bad-entry");

    let mut flow = ListingFlow::new();
    assert_eq!(flow.load_all(&api).await, Err(FlowError::InvalidFormat));
    server.stop().await;
}

#[actix_rt::test]
async fn test_list_http_error_is_fetch_error() {
    let server = start_mock_server().await;
    let api = server.api("broken");

    let mut flow = ListingFlow::new();
    assert_eq!(flow.load_all(&api).await, Err(FlowError::FetchFailed));
    assert_eq!(flow.view(), ListingView::Failed(FlowError::FetchFailed));
    server.stop().await;
}

#[actix_rt::test]
async fn test_trailing_slash_in_base_url() {
    let server = start_mock_server().await;
    let api = HttpLinkApi::new(
        &format!("http://{}/ok/", server.addr),
        Duration::from_secs(1),
    );
    assert_eq!(api.endpoint("api/urls"), format!("http://{}/ok/api/urls", server.addr));
    assert_eq!(api.list_urls().await.unwrap().len(), 3);
    server.stop().await;
}
