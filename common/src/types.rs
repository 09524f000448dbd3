//! APIでやり取りする型定義
//!
//! すべてバックエンドが所有するデータの一時コピー:
//! - Screenshot: 取り込んだ画面キャプチャと生成されたGherkin
//! - Feedback: レビュー結果（承認/却下）
//! - FeedbackRequest: `POST /feedback` のリクエストボディ

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// スクリーンショットのステータス
///
/// 未知の値は `Pending` として扱う（カード色の「その他」分岐と同じ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotStatus {
    Generated,
    Accepted,
    Rejected,
    #[default]
    #[serde(other)]
    Pending,
}

impl ScreenshotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenshotStatus::Pending => "pending",
            ScreenshotStatus::Generated => "generated",
            ScreenshotStatus::Accepted => "accepted",
            ScreenshotStatus::Rejected => "rejected",
        }
    }

    /// ダッシュボードのカード背景クラス
    ///
    /// accepted → rejected → generated の順に判定し、残りは青
    pub fn card_class(&self) -> &'static str {
        match self {
            ScreenshotStatus::Accepted => "bg-green-100 dark:bg-green-900",
            ScreenshotStatus::Rejected => "bg-red-100 dark:bg-red-900",
            ScreenshotStatus::Generated => "bg-yellow-100 dark:bg-yellow-900",
            ScreenshotStatus::Pending => "bg-blue-100 dark:bg-blue-900",
        }
    }
}

impl fmt::Display for ScreenshotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// スクリーンショット（バックエンドのKBエントリ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_name: String,
    /// ジェスチャー（構造は解析器依存なのでそのまま保持）
    #[serde(deserialize_with = "null_as_default")]
    pub gestures: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub conditions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub gherkin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ScreenshotStatus,
    pub rejection_reason: Option<String>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
    pub version: Option<u32>,
}

/// SQLiteの行そのままなので未処理の列は `null` で届く
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Screenshot {
    /// ジェスチャーの表示用サマリ
    pub fn gesture_summaries(&self) -> Vec<String> {
        self.gestures.iter().map(summarize_gesture).collect()
    }

    pub fn gherkin_or_placeholder(&self) -> &str {
        if self.gherkin.trim().is_empty() {
            "No Gherkin generated"
        } else {
            &self.gherkin
        }
    }
}

fn summarize_gesture(gesture: &serde_json::Value) -> String {
    match gesture {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => {
            let kind = ["type", "gesture", "action"]
                .iter()
                .find_map(|key| map.get(*key).and_then(|v| v.as_str()));
            let target = ["target", "element"]
                .iter()
                .find_map(|key| map.get(*key).and_then(|v| v.as_str()));

            match (kind, target) {
                (Some(kind), Some(target)) => format!("{} → {}", kind, target),
                (Some(kind), None) => kind.to_string(),
                _ => gesture.to_string(),
            }
        }
        other => other.to_string(),
    }
}

/// フィードバックのステータス
///
/// バッジは accepted だけ緑、それ以外は赤の二値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Accepted,
    #[serde(other)]
    Rejected,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Accepted => "accepted",
            FeedbackStatus::Rejected => "rejected",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            FeedbackStatus::Accepted => {
                "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
            }
            FeedbackStatus::Rejected => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フィードバック記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: u64,
    pub screenshot_id: u64,
    pub status: FeedbackStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /feedback` のボディ
///
/// None のフィールドは送らない。却下時のコメントは空文字でも送る
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub screenshot_id: u64,
    pub status: FeedbackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FeedbackRequest {
    pub fn accept(screenshot_id: u64) -> Self {
        Self {
            screenshot_id,
            status: FeedbackStatus::Accepted,
            rejection_reason: None,
            comment: None,
        }
    }

    pub fn reject(screenshot_id: u64, reason: RejectionReason, comment: impl Into<String>) -> Self {
        Self {
            screenshot_id,
            status: FeedbackStatus::Rejected,
            rejection_reason: Some(reason.label().to_string()),
            comment: Some(comment.into()),
        }
    }
}

/// 却下理由（固定6種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    WrongGesture,
    MissingErrorState,
    OverCreation,
    TranslationError,
    InvalidConditionLogic,
    UiElementMisidentified,
}

impl RejectionReason {
    pub const ALL: [RejectionReason; 6] = [
        RejectionReason::WrongGesture,
        RejectionReason::MissingErrorState,
        RejectionReason::OverCreation,
        RejectionReason::TranslationError,
        RejectionReason::InvalidConditionLogic,
        RejectionReason::UiElementMisidentified,
    ];

    /// 送信・表示に使う文言
    pub fn label(&self) -> &'static str {
        match self {
            RejectionReason::WrongGesture => "Wrong gesture interpretation",
            RejectionReason::MissingErrorState => "Missing error state",
            RejectionReason::OverCreation => "Over-creation (not in screenshot)",
            RejectionReason::TranslationError => "Incorrect language translation",
            RejectionReason::InvalidConditionLogic => "Invalid condition logic",
            RejectionReason::UiElementMisidentified => "UI element misidentified",
        }
    }

    /// CLI向けの短縮名
    pub fn slug(&self) -> &'static str {
        match self {
            RejectionReason::WrongGesture => "gesture",
            RejectionReason::MissingErrorState => "missing-error-state",
            RejectionReason::OverCreation => "over-creation",
            RejectionReason::TranslationError => "translation",
            RejectionReason::InvalidConditionLogic => "condition-logic",
            RejectionReason::UiElementMisidentified => "ui-element",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RejectionReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RejectionReason::ALL
            .iter()
            .copied()
            .find(|r| r.slug() == needle || r.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let slugs: Vec<&str> = RejectionReason::ALL.iter().map(|r| r.slug()).collect();
                format!("Unknown rejection reason: {}. Use one of: {}", s, slugs.join(", "))
            })
    }
}

/// `GET /export` のレスポンス（一覧取得・エクスポート兼用）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotList {
    pub results: Vec<Screenshot>,
    pub message: Option<String>,
    pub exported_files: Option<u64>,
}

/// エクスポート結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSummary {
    pub message: String,
    pub exported_files: u64,
}

impl ExportSummary {
    pub fn files_line(&self) -> String {
        format!("Exported {} files.", self.exported_files)
    }
}

/// `GET /feedback` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackList {
    pub results: Vec<Feedback>,
}

/// タイムスタンプを `YYYY-MM-DD HH:MM:SS` に整形
///
/// 解釈できない値はそのまま、値なしは "-"
pub fn format_timestamp(raw: Option<&str>) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}
