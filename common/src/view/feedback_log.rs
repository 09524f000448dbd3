//! フィードバック履歴画面

use std::collections::HashMap;

use crate::api::{ApiClient, Transport};
use crate::types::{format_timestamp, Feedback, Screenshot};
use crate::view::LoadState;

/// テーブル1行分
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub id: u64,
    pub screenshot_id: u64,
    pub feature_name: String,
    pub status: &'static str,
    pub badge_class: &'static str,
    pub reason: String,
    pub comment: String,
    pub created: String,
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// フィードバックにスクリーンショットの機能名を付けて行にする
pub fn build_rows(screenshots: &[Screenshot], feedback: &[Feedback]) -> Vec<FeedbackRow> {
    let names: HashMap<u64, &str> = screenshots
        .iter()
        .map(|s| (s.id, s.feature_name.as_str()))
        .collect();

    feedback
        .iter()
        .map(|f| FeedbackRow {
            id: f.id,
            screenshot_id: f.screenshot_id,
            feature_name: or_dash(names.get(&f.screenshot_id).copied()),
            status: f.status.as_str(),
            badge_class: f.status.badge_class(),
            reason: or_dash(f.rejection_reason.as_deref()),
            comment: or_dash(f.comment.as_deref()),
            created: format_timestamp(f.created_at.as_deref()),
        })
        .collect()
}

/// 一覧取得 → フィードバック取得（順番に実行）
pub async fn load<T: Transport>(client: &ApiClient<T>) -> LoadState<Vec<FeedbackRow>> {
    let screenshots = match client.list_screenshots().await {
        Ok(list) => list,
        Err(e) => return LoadState::Failed(e.to_string()),
    };
    LoadState::from_result(
        client
            .list_feedback()
            .await
            .map(|feedback| build_rows(&screenshots, &feedback)),
    )
}
