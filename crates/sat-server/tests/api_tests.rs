//! Router tests driven through `oneshot`, with an in-process Space-Track mock
//! for the extraction endpoint.

use std::collections::HashMap;
use std::path::Path;

use axum::{
    Form, Router,
    body::Body,
    http::{Request, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use pretty_assertions::assert_eq;
use sat_config::SatConfig;
use sat_server::{AppState, build_router};
use serde_json::Value;
use tower::util::ServiceExt;

fn config(root: &Path, base_url: &str, username: &str, password: &str) -> SatConfig {
    let mut config = SatConfig::default();
    config.spacetrack.base_url = base_url.to_string();
    config.spacetrack.username = username.to_string();
    config.spacetrack.password = password.to_string();
    config.spacetrack.timeout_secs = 5;
    config.output.root_dir = root.to_path_buf();
    config
}

fn app(config: SatConfig) -> Router {
    build_router(AppState::new(config))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should read body")
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("should parse JSON")
}

// =============================================================================
// Mock provider
// =============================================================================

async fn mock_login(Form(form): Form<HashMap<String, String>>) -> Response {
    if form.get("password").map(String::as_str) != Some("hunter2") {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }
    ([(header::SET_COOKIE, "chocolatechip=mock; Path=/")], "\"\"").into_response()
}

async fn mock_query(uri: Uri) -> &'static str {
    if uri.path().contains("cdm_public") {
        r#"[{"CDM_ID": "1", "PC": "0.5"}, {"CDM_ID": "2", "PC": "0.002"}]"#
    } else if uri.path().contains("DEBRIS") {
        "[]"
    } else {
        r#"[{"NORAD_CAT_ID": "5", "OBJECT_NAME": "VANGUARD 1"}]"#
    }
}

async fn spawn_provider() -> String {
    let app = Router::new()
        .route("/ajaxauth/login", post(mock_login))
        .route("/ajaxauth/logout", get(|| async { "\"ok\"" }))
        .route("/basicspacedata/query/{*rest}", get(mock_query));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================================
// Banner and health
// =============================================================================

#[tokio::test]
async fn health_reports_service_and_version() {
    let response = app(SatConfig::default())
        .oneshot(get_request("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "satellite-extractor-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn root_returns_banner() {
    let response = app(SatConfig::default())
        .oneshot(get_request("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("/extract"));
}

// =============================================================================
// Extraction
// =============================================================================

#[tokio::test]
async fn extract_without_credentials_is_server_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(tmp.path(), "http://127.0.0.1:9", "", "");

    let response = app(config).oneshot(get_request("/extract")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("extraction failed: "), "{detail}");
    assert!(detail.contains("credentials"), "{detail}");
    assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn extract_with_rejected_login_is_server_error() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_provider().await;
    let config = config(tmp.path(), &base_url, "ops@example.org", "wrong");

    let response = app(config).oneshot(get_request("/extract")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("authentication failed")
    );
}

#[tokio::test]
async fn extract_writes_snapshot_and_serves_files() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_provider().await;
    let router = app(config(tmp.path(), &base_url, "ops@example.org", "hunter2"));

    let response = router
        .clone()
        .oneshot(get_request("/extract"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["metadata"]["count_active"], 1);
    assert_eq!(body["metadata"]["count_debris"], 0);
    assert_eq!(body["metadata"]["count_conjunctions"], 2);
    assert_eq!(body["metadata"]["count_total"], 3);
    assert_eq!(body["stats"]["high_risk_count"], 1);
    assert_eq!(body["stats"]["medium_risk_count"], 1);
    assert_eq!(body["stats"]["low_risk_count"], 0);

    let output_dir = body["csv_output_dir"].as_str().unwrap();
    let snapshot_dir = Path::new(output_dir)
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(snapshot_dir.starts_with("critical_data_"));

    let response = router.clone().oneshot(get_request("/files")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            format!("{snapshot_dir}/active_tle.csv"),
            format!("{snapshot_dir}/critical_cdm.csv"),
            format!("{snapshot_dir}/metadata.json"),
        ]
    );

    let response = router
        .clone()
        .oneshot(get_request(&format!("/download/{snapshot_dir}/active_tle.csv")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"active_tle.csv\""
    );
    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(csv.starts_with("NORAD_CAT_ID,OBJECT_NAME,"));
    assert!(csv.contains("5,VANGUARD 1,"));

    let response = router
        .oneshot(get_request(&format!("/download/{snapshot_dir}/metadata.json")))
        .await
        .unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let metadata: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(metadata["count_total"], 3);
}

// =============================================================================
// Files and downloads
// =============================================================================

#[tokio::test]
async fn files_is_empty_before_any_extraction() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(&tmp.path().join("never-created"), "http://127.0.0.1:9", "", "");

    let response = app(config).oneshot(get_request("/files")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "files": [] }));
}

#[tokio::test]
async fn download_rejects_names_outside_snapshots() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("secret.txt"), "nope").unwrap();
    let router = app(config(tmp.path(), "http://127.0.0.1:9", "", ""));

    for uri in [
        "/download/secret.txt",
        "/download/critical_data_1/..%2F..%2Fsecret.txt",
        "/download/other/metadata.json",
    ] {
        let response = router.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().starts_with("invalid file name"));
    }
}

#[tokio::test]
async fn download_of_missing_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("critical_data_20240501_120000")).unwrap();
    let router = app(config(tmp.path(), "http://127.0.0.1:9", "", ""));

    let response = router
        .oneshot(get_request("/download/critical_data_20240501_120000/debris_tle.csv"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(
        body["detail"],
        "file not found: critical_data_20240501_120000/debris_tle.csv"
    );
}
