//! reqwestによるTransport実装

use async_trait::async_trait;
use gherkin_review_common::{Error, Transport};
use std::time::Duration;

use crate::error::{Result, ReviewCliError};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ReviewCliError::HttpClient(e.to_string()))?;
        Ok(Self { client, timeout_ms })
    }

    fn map_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout {
                millis: self.timeout_ms,
            }
        } else {
            Error::Network(error.to_string())
        }
    }

    async fn read(&self, response: reqwest::Response) -> gherkin_review_common::Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::from_status(status.as_u16(), &body))
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> gherkin_review_common::Result<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        self.read(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> gherkin_review_common::Result<String> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        self.read(response).await
    }
}
