//! wiremockによるモックAPIサーバー

#![allow(dead_code)]

use gherkin_review::http::ReqwestTransport;
use gherkin_review_common::{ApiClient, ClientConfig, ReadinessGate};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_PREFIX: &str = "/api/v1";

pub const LIST_BODY: &str = r#"{"results": [
    {"id": 1, "filename": "home.png", "feature_name": "Camera Capture", "status": "generated",
     "gestures": [{"type": "tap", "target": "shutter"}], "conditions": ["flash on"],
     "gherkin": "Feature: Camera Capture", "created_at": "2026-03-01T09:30:00"},
    {"id": 2, "filename": "flash.png", "feature_name": "Flash Toggle", "status": "rejected",
     "rejection_reason": "Missing error state", "comment": "no low-light case"}
]}"#;

pub fn api_path(p: &str) -> String {
    format!("{}{}", API_PREFIX, p)
}

pub fn client_for(server: &MockServer, timeout_ms: u64) -> ApiClient<ReqwestTransport> {
    let base = format!("{}{}", server.uri(), API_PREFIX);
    let config = ClientConfig::default()
        .with_base_url(Some(base.as_str()))
        .with_timeout_ms(timeout_ms);
    let transport = ReqwestTransport::new(timeout_ms).expect("HTTPクライアント作成失敗");
    ApiClient::new(transport, config)
}

/// ingest/generate と一覧取得をまとめて登録
pub async fn mount_ready_backend(server: &MockServer) {
    for trigger in ["/ingest", "/generate"] {
        Mock::given(method("GET"))
            .and(path(api_path(trigger)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(api_path("/export")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LIST_BODY, "application/json"))
        .mount(server)
        .await;
}

pub fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("UTF-8でない出力")
}

pub fn gate() -> ReadinessGate {
    ReadinessGate::new()
}
