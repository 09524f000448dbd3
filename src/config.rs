use crate::error::{Result, ReviewCliError};
use gherkin_review_common::config::DEFAULT_TIMEOUT_MS;
use gherkin_review_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_URL_ENV: &str = "GHERKIN_REVIEW_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_MS / 1000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは既定値として扱う（`config` での上書き用）
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable config {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewCliError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("gherkin-review").join("config.json"))
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        self.api_base_url = Some(url);
        self.save()
    }

    /// 優先順位: --api-url / 環境変数 > 設定ファイル > 既定値
    pub fn client_config(&self, api_url: Option<&str>) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_base_url.as_deref())
            .with_base_url(api_url)
            .with_timeout_ms(self.timeout_seconds.max(1).saturating_mul(1000))
    }
}
