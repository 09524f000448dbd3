//! ブラウザ上でのTransportテスト（wasm-pack test --headless）

#![cfg(target_arch = "wasm32")]

use gherkin_review_common::{ApiClient, ClientConfig, Error};
use gherkin_review_web::api::GlooTransport;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn unreachable_backend_is_network_error() {
    let config = ClientConfig::default().with_base_url(Some("http://127.0.0.1:9/api/v1"));
    let client = ApiClient::new(GlooTransport::new(config.timeout_ms), config);

    let error = client.list_screenshots().await.unwrap_err();
    assert!(matches!(error, Error::Network(_) | Error::Timeout { .. }));
}

#[wasm_bindgen_test]
async fn failed_trigger_leaves_gate_closed() {
    let config = ClientConfig::default().with_base_url(Some("http://127.0.0.1:9/api/v1"));
    let client = ApiClient::new(GlooTransport::new(config.timeout_ms), config);
    let gate = gherkin_review_common::ReadinessGate::new();

    gate.ensure(&client).await;
    assert!(!gate.is_ready());
}
