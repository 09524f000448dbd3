//! 各サブコマンドの処理
//!
//! 画面と同じ手順（common::view）を使い、結果をテキストで書き出す

use std::io::Write;

use gherkin_review_common::view::export::{self, ExportState};
use gherkin_review_common::view::review::{self, Decision, ReviewForm, SubmitOutcome};
use gherkin_review_common::view::{dashboard, feedback_log};
use gherkin_review_common::{
    ApiClient, LoadState, ReadinessGate, RejectionReason, Screenshot, ScreenshotStatus, Transport,
};

use crate::error::{Result, ReviewCliError};

fn ready<V>(state: LoadState<V>, id: Option<&str>) -> Result<V> {
    match state {
        LoadState::Ready(value) => Ok(value),
        LoadState::NotFound(message) => Err(match id {
            Some(id) => ReviewCliError::NotFound(id.to_string()),
            None => ReviewCliError::Load(message),
        }),
        LoadState::Failed(message) => Err(ReviewCliError::Load(message)),
        LoadState::Loading => Err(ReviewCliError::Load("still loading".to_string())),
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// ダッシュボード相当の一覧
pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    gate: &ReadinessGate,
    out: &mut impl Write,
) -> Result<()> {
    let cards = ready(dashboard::load(client, gate).await, None)?;

    if cards.is_empty() {
        writeln!(out, "No screenshots.")?;
        return Ok(());
    }

    for card in cards {
        writeln!(
            out,
            "{:>4}  {:<10} {} ({})  {}  -> {}",
            card.id, card.status, card.feature_name, card.filename, card.created, card.review_href
        )?;
    }
    Ok(())
}

/// レビュー画面相当の詳細表示
pub async fn show<T: Transport>(
    client: &ApiClient<T>,
    gate: &ReadinessGate,
    raw_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let screenshot = ready(review::load(client, gate, raw_id).await, Some(raw_id))?;
    write_screenshot(client, &screenshot, out)
}

fn write_screenshot<T: Transport>(
    client: &ApiClient<T>,
    s: &Screenshot,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Review: {}", s.feature_name)?;
    writeln!(out, "  File:       {}", s.filename)?;
    writeln!(out, "  Image:      {}", client.config().image_url(&s.filename))?;
    writeln!(out, "  Status:     {}", s.status)?;
    if let Some(version) = s.version {
        writeln!(out, "  Version:    {}", version)?;
    }
    writeln!(out, "  Gestures:   {}", join_or_dash(&s.gesture_summaries()))?;
    writeln!(out, "  Conditions: {}", join_or_dash(&s.conditions))?;
    writeln!(out, "  Errors:     {}", join_or_dash(&s.errors))?;
    writeln!(out, "  Languages:  {}", join_or_dash(&s.languages))?;
    writeln!(out)?;
    writeln!(out, "--- Generated Gherkin ---")?;
    writeln!(out, "{}", s.gherkin_or_placeholder())?;

    if s.status == ScreenshotStatus::Rejected {
        writeln!(out)?;
        writeln!(out, "--- Rejection Details ---")?;
        writeln!(out, "  Reason:  {}", s.rejection_reason.as_deref().unwrap_or_default())?;
        writeln!(out, "  Comment: {}", s.comment.as_deref().unwrap_or_default())?;
    }
    Ok(())
}

/// 承認/却下を送信
pub async fn decide<T: Transport>(
    client: &ApiClient<T>,
    gate: &ReadinessGate,
    raw_id: &str,
    decision: Decision,
    reason: Option<RejectionReason>,
    comment: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let screenshot = ready(review::load(client, gate, raw_id).await, Some(raw_id))?;

    let mut form = ReviewForm {
        reason,
        comment: comment.unwrap_or_default(),
        in_flight: false,
    };
    let outcome = review::submit(client, &mut form, decision, screenshot.id)
        .await
        .map_err(|blocked| {
            ReviewCliError::Blocked(
                blocked
                    .prompt()
                    .unwrap_or("a submission is already in progress")
                    .to_string(),
            )
        })?;

    match outcome {
        SubmitOutcome::Navigate { notice, .. } => {
            writeln!(out, "{}", notice)?;
            Ok(())
        }
        SubmitOutcome::Stay { alert } => Err(ReviewCliError::Rejected(alert)),
    }
}

/// 承認済みのエクスポート
pub async fn export<T: Transport>(client: &ApiClient<T>, out: &mut impl Write) -> Result<()> {
    match export::run(client).await {
        ExportState::Done(summary) => {
            if !summary.message.is_empty() {
                writeln!(out, "{}", summary.message)?;
            }
            writeln!(out, "{}", summary.files_line())?;
            Ok(())
        }
        ExportState::Failed(message) => Err(ReviewCliError::Load(message)),
        ExportState::Idle | ExportState::Exporting => Ok(()),
    }
}

/// フィードバック履歴
pub async fn feedback<T: Transport>(client: &ApiClient<T>, out: &mut impl Write) -> Result<()> {
    let rows = ready(feedback_log::load(client).await, None)?;

    if rows.is_empty() {
        writeln!(out, "No feedback recorded.")?;
        return Ok(());
    }

    for row in rows {
        writeln!(
            out,
            "{:>4}  screenshot {:<5} {:<9} {} | {} | {} | {}",
            row.id, row.screenshot_id, row.status, row.feature_name, row.reason, row.comment, row.created
        )?;
    }
    Ok(())
}
