//! レビュー画面: 1件のスクリーンショットを承認/却下する
//!
//! 送信中フラグは画面インスタンスごと。別タブからの同時送信は
//! バックエンド側で調停される前提。

use crate::api::{ApiClient, Transport};
use crate::error::Result;
use crate::readiness::ReadinessGate;
use crate::types::{FeedbackRequest, RejectionReason, Screenshot};
use crate::view::LoadState;

pub const MISSING_REASON_MESSAGE: &str = "Please select a rejection reason";

/// ルートパラメータを数値IDに変換
pub fn parse_route_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// 一覧から線形探索
pub fn find_screenshot(list: Vec<Screenshot>, id: u64) -> Option<Screenshot> {
    list.into_iter().find(|s| s.id == id)
}

/// 準備確認 → 一覧取得 → ID検索
pub async fn load<T: Transport>(
    client: &ApiClient<T>,
    gate: &ReadinessGate,
    raw_id: &str,
) -> LoadState<Screenshot> {
    gate.ensure(client).await;

    let list = match client.list_screenshots().await {
        Ok(list) => list,
        Err(e) => return LoadState::Failed(e.to_string()),
    };

    match parse_route_id(raw_id).and_then(|id| find_screenshot(list, id)) {
        Some(screenshot) => LoadState::Ready(screenshot),
        None => LoadState::NotFound("Screenshot not found".to_string()),
    }
}

/// レビュー判断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    fn success_notice(self) -> &'static str {
        match self {
            Decision::Accept => "Test case accepted!",
            Decision::Reject => "Test case rejected!",
        }
    }
}

/// 送信できなかった理由（ネットワークには到達しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// 送信中
    InFlight,
    /// 却下理由が未選択
    MissingReason,
}

impl Blocked {
    /// ユーザーに見せる文言（送信中は黙って無視する）
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Blocked::InFlight => None,
            Blocked::MissingReason => Some(MISSING_REASON_MESSAGE),
        }
    }
}

/// 送信後の画面の振る舞い
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 通知を出してから遷移
    Navigate { to: &'static str, notice: &'static str },
    /// アラートを出してその場に留まる
    Stay { alert: String },
}

impl SubmitOutcome {
    pub fn apply(self, navigate: impl FnOnce(&str), alert: impl Fn(&str)) {
        match self {
            SubmitOutcome::Navigate { to, notice } => {
                alert(notice);
                navigate(to);
            }
            SubmitOutcome::Stay { alert: message } => alert(&message),
        }
    }
}

/// 承認/却下フォームの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub reason: Option<RejectionReason>,
    pub comment: String,
    pub in_flight: bool,
}

impl ReviewForm {
    /// セレクトボックスの値から理由を設定（空なら未選択）
    pub fn select_reason(&mut self, value: &str) {
        self.reason = value.parse().ok();
    }

    /// 送信開始。成功したら送信中フラグを立てる
    pub fn begin(
        &mut self,
        decision: Decision,
        screenshot_id: u64,
    ) -> std::result::Result<FeedbackRequest, Blocked> {
        if self.in_flight {
            return Err(Blocked::InFlight);
        }

        let request = match decision {
            Decision::Accept => FeedbackRequest::accept(screenshot_id),
            Decision::Reject => {
                let reason = self.reason.ok_or(Blocked::MissingReason)?;
                FeedbackRequest::reject(screenshot_id, reason, self.comment.clone())
            }
        };

        self.in_flight = true;
        Ok(request)
    }

    /// 送信完了。成否にかかわらず送信中フラグを下ろす
    pub fn finish(&mut self, decision: Decision, result: Result<()>) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                log::info!("feedback submitted: {:?}", decision);
                SubmitOutcome::Navigate {
                    to: "/",
                    notice: decision.success_notice(),
                }
            }
            Err(e) => {
                log::warn!("feedback submission failed: {}", e);
                SubmitOutcome::Stay {
                    alert: format!("Error: {}", e),
                }
            }
        }
    }
}

/// 送信の一連の流れ（begin → POST → finish）
pub async fn submit<T: Transport>(
    client: &ApiClient<T>,
    form: &mut ReviewForm,
    decision: Decision,
    screenshot_id: u64,
) -> std::result::Result<SubmitOutcome, Blocked> {
    let request = form.begin(decision, screenshot_id)?;
    let result = client.submit_feedback(&request).await;
    Ok(form.finish(decision, result))
}
