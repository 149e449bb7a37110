//! Integration tests for the Updaters Server API

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use updaters_core::{App, Asset, LookupError, Release, ReleaseSource};
use updaters_server::routes::create_router;
use updaters_server::state::AppState;

/// What the fake upstream answers with
#[derive(Clone)]
enum Upstream {
    Release(Release),
    Status(u16),
    BadJson,
}

/// Release source returning canned data and counting calls
struct FakeSource {
    upstream: Upstream,
    calls: Arc<AtomicUsize>,
    requested: Arc<std::sync::Mutex<Vec<App>>>,
}

#[async_trait]
impl ReleaseSource for FakeSource {
    async fn latest_release(&self, app: App) -> updaters_core::Result<Release> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(app);
        match &self.upstream {
            Upstream::Release(release) => Ok(release.clone()),
            Upstream::Status(status) => Err(LookupError::UpstreamStatus {
                status: *status,
                body: "{\"message\":\"Not Found\"}".to_string(),
            }),
            Upstream::BadJson => {
                Err(serde_json::from_str::<Release>("<html>").unwrap_err().into())
            }
        }
    }
}

struct Harness {
    server: TestServer,
    calls: Arc<AtomicUsize>,
    requested: Arc<std::sync::Mutex<Vec<App>>>,
}

/// Create a test server backed by a fake upstream
fn create_test_server(upstream: Upstream) -> Harness {
    let calls = Arc::new(AtomicUsize::new(0));
    let requested = Arc::new(std::sync::Mutex::new(Vec::new()));
    let source = FakeSource {
        upstream,
        calls: calls.clone(),
        requested: requested.clone(),
    };
    let app = create_router(AppState::with_source(source), None);
    let server = TestServer::new(app).expect("Failed to create test server");
    Harness {
        server,
        calls,
        requested,
    }
}

fn release(tag: &str, assets: &[(&str, &str)]) -> Release {
    Release {
        tag_name: tag.to_string(),
        app_image_url: String::new(),
        assets: assets
            .iter()
            .map(|(name, url)| Asset {
                url: format!("https://api.github.com/assets/{}", name),
                name: name.to_string(),
                browser_download_url: url.to_string(),
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_health_check() {
    let harness = create_test_server(Upstream::Status(500));

    let response = harness.server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_zen_scenario() {
    let harness = create_test_server(Upstream::Release(release(
        "v1.0",
        &[("zen-x86_64.AppImage", "https://x/zen.AppImage")],
    )));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "zen")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );

    let body: Value = response.json();
    assert_eq!(body["tag_name"], "v1.0");
    assert_eq!(body["app_image_url"], "https://x/zen.AppImage");
    assert_eq!(body["assets"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["assets"][0]["browser_download_url"],
        "https://x/zen.AppImage"
    );
    assert_eq!(*harness.requested.lock().unwrap(), vec![App::Zen]);
}

#[tokio::test]
async fn test_teams_scenario() {
    let harness = create_test_server(Upstream::Release(release(
        "v2.0.0",
        &[
            ("teams-for-linux-2.0.0.deb", "https://x/teams.deb"),
            ("teams-for-linux-2.0.0-AppImage", "https://x/teams.AppImage"),
        ],
    )));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "teams")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["tag_name"], "v2.0.0");
    assert_eq!(body["app_image_url"], "https://x/teams.AppImage");
    assert_eq!(*harness.requested.lock().unwrap(), vec![App::Teams]);
}

#[tokio::test]
async fn test_teams_tag_without_prefix() {
    let harness = create_test_server(Upstream::Release(release(
        "1.2.3",
        &[("teams-for-linux-1.2.3-AppImage", "https://x/teams.AppImage")],
    )));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "teams")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["app_image_url"], "https://x/teams.AppImage");
}

#[tokio::test]
async fn test_first_matching_asset_wins() {
    let harness = create_test_server(Upstream::Release(release(
        "v3.1",
        &[
            ("zen-x86_64.AppImage", "https://x/first"),
            ("zen-x86_64.AppImage", "https://x/second"),
        ],
    )));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "zen")
        .await;

    let body: Value = response.json();
    assert_eq!(body["app_image_url"], "https://x/first");
}

#[tokio::test]
async fn test_no_matching_asset_is_still_ok() {
    let harness = create_test_server(Upstream::Release(release(
        "v2.0.0",
        &[("teams-for-linux-2.0.0.deb", "https://x/teams.deb")],
    )));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "teams")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tag_name"], "v2.0.0");
    assert_eq!(body["app_image_url"], "");
}

#[tokio::test]
async fn test_unsupported_names_are_rejected_without_upstream_call() {
    let harness = create_test_server(Upstream::Release(release("v1.0", &[])));

    for name in ["foo", "", "Zen", "teams-for-linux"] {
        let response = harness
            .server
            .get("/api/versions")
            .add_query_param("name", name)
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "", "body should be empty for {name:?}");
    }

    assert_eq!(harness.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let harness = create_test_server(Upstream::Release(release("v1.0", &[])));

    let response = harness.server.get("/api/versions").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "");
    assert_eq!(harness.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_repeated_name_uses_first_value() {
    let harness = create_test_server(Upstream::Release(release("v1.0", &[])));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "zen")
        .add_query_param("name", "foo")
        .await;

    response.assert_status_ok();
    assert_eq!(*harness.requested.lock().unwrap(), vec![App::Zen]);
}

#[tokio::test]
async fn test_upstream_status_error_returns_500() {
    let harness = create_test_server(Upstream::Status(404));

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "zen")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
    assert_eq!(harness.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_upstream_decode_error_returns_500() {
    let harness = create_test_server(Upstream::BadJson);

    let response = harness
        .server
        .get("/api/versions")
        .add_query_param("name", "teams")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_each_request_calls_upstream_once() {
    let harness = create_test_server(Upstream::Release(release("v1.0", &[])));

    for _ in 0..3 {
        harness
            .server
            .get("/api/versions")
            .add_query_param("name", "zen")
            .await
            .assert_status_ok();
    }

    assert_eq!(harness.calls.load(Ordering::SeqCst), 3);
}
