//! REST APIクライアント
//!
//! HTTPの実装は `Transport` に任せる（Webはgloo-net、CLIはreqwest）。
//! リトライ・キャッシュはしない。

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{
    ExportSummary, Feedback, FeedbackList, FeedbackRequest, Screenshot, ScreenshotList,
};

/// HTTP送受信
///
/// 2xx以外・通信失敗・タイムアウトはすべて `Err` で返す
#[async_trait(?Send)]
pub trait Transport {
    /// GETしてレスポンスボディを返す
    async fn get(&self, url: &str) -> Result<String>;

    /// JSONをPOSTしてレスポンスボディを返す
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String>;
}

/// APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 取り込みトリガー（結果は使わない）
    pub async fn ingest(&self) -> Result<()> {
        self.transport.get(&self.config.url("/ingest")).await.map(|_| ())
    }

    /// Gherkin生成トリガー（結果は使わない）
    pub async fn generate(&self) -> Result<()> {
        self.transport.get(&self.config.url("/generate")).await.map(|_| ())
    }

    /// 全スクリーンショットを取得
    pub async fn list_screenshots(&self) -> Result<Vec<Screenshot>> {
        let list: ScreenshotList = self.get_json(&self.config.screenshots_path).await?;
        Ok(list.results)
    }

    /// 承認済みテストケースを .feature に書き出す
    pub async fn export_accepted(&self) -> Result<ExportSummary> {
        self.get_json(&self.config.export_path).await
    }

    /// 全フィードバックを取得
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        let list: FeedbackList = self.get_json("/feedback").await?;
        Ok(list.results)
    }

    /// レビュー結果を送信
    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.transport
            .post_json(&self.config.url("/feedback"), &body)
            .await
            .map(|_| ())
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let body = self.transport.get(&self.config.url(path)).await?;
        // 空ボディは空オブジェクトとして扱う（全フィールドにdefaultあり）
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }
}
