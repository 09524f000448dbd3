//! 取り込み・生成トリガーのセッション単位ゲート
//!
//! `/ingest` → `/generate` は一度成功したらセッション中は呼ばない。
//! 失敗は握りつぶし、次の画面遷移で再試行する。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::{ApiClient, Transport};

/// バックエンド準備済みフラグ（クローンは同じ状態を共有）
#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    ready: Arc<AtomicBool>,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// 未確認なら取り込み → 生成を順に実行
    pub async fn ensure<T: Transport>(&self, client: &ApiClient<T>) {
        if self.is_ready() {
            return;
        }

        let ingested = match client.ingest().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("ingest trigger failed: {}", e);
                false
            }
        };

        let generated = match client.generate().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("generate trigger failed: {}", e);
                false
            }
        };

        if ingested && generated {
            self.ready.store(true, Ordering::Release);
            log::info!("backend readiness established for this session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn test_triggers_run_once_per_session() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}");
        let client = transport.client();
        let gate = ReadinessGate::new();

        block_on(gate.ensure(&client));
        block_on(gate.ensure(&client));

        assert!(gate.is_ready());
        assert_eq!(transport.paths(), vec!["GET /ingest", "GET /generate"]);
    }

    #[test]
    fn test_clones_share_state() {
        let transport = FakeTransport::new()
            .respond("GET /ingest", "{}")
            .respond("GET /generate", "{}");
        let client = transport.client();
        let gate = ReadinessGate::new();
        let other = gate.clone();

        block_on(gate.ensure(&client));
        block_on(other.ensure(&client));

        assert!(other.is_ready());
        assert_eq!(transport.calls().len(), 2);
    }

    #[test]
    fn test_failed_trigger_is_retried_next_time() {
        let transport = FakeTransport::new()
            .fail_status("GET /ingest", 500)
            .respond("GET /generate", "{}");
        let client = transport.client();
        let gate = ReadinessGate::new();

        block_on(gate.ensure(&client));
        assert!(!gate.is_ready());

        // 失敗しても生成トリガーは呼ばれる
        assert_eq!(transport.paths(), vec!["GET /ingest", "GET /generate"]);

        block_on(gate.ensure(&client));
        assert_eq!(transport.calls().len(), 4);
    }
}
