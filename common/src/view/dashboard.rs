//! ダッシュボード: 全スクリーンショットのカード一覧

use crate::api::{ApiClient, Transport};
use crate::readiness::ReadinessGate;
use crate::types::{format_timestamp, Screenshot};
use crate::view::LoadState;

/// カード1枚分の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub id: u64,
    pub feature_name: String,
    pub filename: String,
    pub status: &'static str,
    pub created: String,
    pub card_class: &'static str,
    pub review_href: String,
}

impl From<&Screenshot> for DashboardCard {
    fn from(s: &Screenshot) -> Self {
        Self {
            id: s.id,
            feature_name: s.feature_name.clone(),
            filename: s.filename.clone(),
            status: s.status.as_str(),
            created: format_timestamp(s.created_at.as_deref()),
            card_class: s.status.card_class(),
            review_href: review_href(s.id),
        }
    }
}

pub fn review_href(id: u64) -> String {
    format!("/review/{}", id)
}

/// 準備確認 → 一覧取得
///
/// 一覧取得の失敗だけが画面のエラーになる
pub async fn load<T: Transport>(
    client: &ApiClient<T>,
    gate: &ReadinessGate,
) -> LoadState<Vec<DashboardCard>> {
    gate.ensure(client).await;
    LoadState::from_result(
        client
            .list_screenshots()
            .await
            .map(|list| list.iter().map(DashboardCard::from).collect()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn test_single_generated_card() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}")
            .respond(
                "GET /export",
                r#"{"results": [{"id": 1, "filename": "home.png", "feature_name": "Home", "status": "generated"}]}"#,
            );

        let state = block_on(load(&transport.client(), &ReadinessGate::new()));
        let cards = state.ready().expect("読み込み失敗");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_class, "bg-yellow-100 dark:bg-yellow-900");
        assert_eq!(cards[0].review_href, "/review/1");
        assert_eq!(cards[0].created, "-");
        assert_eq!(
            transport.paths(),
            vec!["GET /ingest", "GET /generate", "GET /export"]
        );
    }

    #[test]
    fn test_unprocessed_row_renders_blue_card() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}")
            .respond(
                "GET /export",
                r#"{"results": [
                    {"id": 1, "filename": "home.png", "status": "generated"},
                    {"id": 2, "feature_name": null, "status": null, "gherkin": null}
                ]}"#,
            );

        let state = block_on(load(&transport.client(), &ReadinessGate::new()));
        let cards = state.ready().expect("null列で失敗してはいけない");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].status, "pending");
        assert_eq!(cards[1].card_class, "bg-blue-100 dark:bg-blue-900");
    }

    #[test]
    fn test_trigger_failures_are_swallowed() {
        let transport = FakeTransport::new()
            .fail_status("GET /ingest", 500)
            .timeout("GET /generate")
            .respond("GET /export", r#"{"results": []}"#);

        let state = block_on(load(&transport.client(), &ReadinessGate::new()));
        assert_eq!(state, LoadState::Ready(vec![]));
    }

    #[test]
    fn test_list_failure_is_error_state() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}")
            .fail_status("GET /export", 502);

        let state = block_on(load(&transport.client(), &ReadinessGate::new()));
        assert_eq!(
            state,
            LoadState::Failed("Request failed with status code 502".to_string())
        );
    }

    #[test]
    fn test_second_visit_skips_triggers() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}")
            .respond("GET /export", r#"{"results": []}"#);
        let client = transport.client();
        let gate = ReadinessGate::new();

        block_on(load(&client, &gate));
        block_on(load(&client, &gate));

        assert_eq!(
            transport.paths(),
            vec!["GET /ingest", "GET /generate", "GET /export", "GET /export"]
        );
    }
}
