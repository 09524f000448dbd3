//! APIクライアント設定

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_IMAGE_ROOT: &str = "/data/input_screenshots";

/// APIクライアント設定
///
/// 一覧取得とエクスポートは別のパスとして持つ（現行バックエンドはどちらも `/export`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub screenshots_path: String,
    pub export_path: String,
    pub image_root: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            screenshots_path: "/export".to_string(),
            export_path: "/export".to_string(),
            image_root: DEFAULT_IMAGE_ROOT.to_string(),
        }
    }
}

impl ClientConfig {
    /// 環境から渡されたベースURLで上書き（空なら既定値のまま）
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// エンドポイントの完全なURL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// スクリーンショット画像の静的パス
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/{}", self.image_root.trim_end_matches('/'), filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.url("/ingest"), "http://localhost:8000/api/v1/ingest");
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_base_url(Some("https://review.local/api/v1/"));
        assert_eq!(config.url("feedback"), "https://review.local/api/v1/feedback");
    }

    #[test]
    fn test_blank_override_keeps_default() {
        let config = ClientConfig::default().with_base_url(Some("   "));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        let config = ClientConfig::default().with_base_url(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_image_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.image_url("settings_01.png"),
            "/data/input_screenshots/settings_01.png"
        );
    }
}
