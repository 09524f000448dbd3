//! gloo-netによるTransport実装とコンテキスト取得ヘルパー

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;

use gherkin_review_common::{ApiClient, Error, Preferences, ReadinessGate, Result, Transport};

pub type WebClient = ApiClient<GlooTransport>;

/// ブラウザのfetchによる送受信（固定タイムアウト付き）
#[derive(Debug, Clone, Copy)]
pub struct GlooTransport {
    timeout_ms: u64,
}

impl GlooTransport {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    async fn send(&self, request: Request) -> Result<String> {
        let fetch = Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;
            let ok = response.ok();
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;

            if ok {
                Ok(body)
            } else {
                Err(Error::from_status(status, &body))
            }
        });
        let timer = Box::pin(TimeoutFuture::new(
            u32::try_from(self.timeout_ms).unwrap_or(u32::MAX),
        ));

        match select(fetch, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(Error::Timeout {
                millis: self.timeout_ms,
            }),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let request = Request::get(url)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        self.send(request).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| Error::Network(e.to_string()))?;
        self.send(request).await
    }
}

pub fn use_client() -> WebClient {
    expect_context::<WebClient>()
}

pub fn use_readiness() -> ReadinessGate {
    expect_context::<ReadinessGate>()
}

pub fn use_preferences() -> RwSignal<Preferences> {
    expect_context::<RwSignal<Preferences>>()
}
