//! 画面のマウント期間に紐づく読み込みスコープ
//!
//! アンマウント後や、同じ画面で新しい読み込みが始まった後に届いた
//! 古い結果を捨てるために使う。

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    closed: AtomicBool,
    generation: AtomicU64,
}

/// マウントスコープ（クローンは同じ状態を共有）
#[derive(Debug, Clone, Default)]
pub struct MountScope {
    inner: Arc<Inner>,
}

/// 1回分の読み込みを表すチケット
#[derive(Debug, Clone)]
pub struct Ticket {
    inner: Arc<Inner>,
    generation: u64,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい読み込みを開始（以前のチケットは無効になる）
    pub fn begin(&self) -> Ticket {
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            inner: Arc::clone(&self.inner),
            generation,
        }
    }

    /// 現在の読み込みに紐づくチケット（世代は進めない）
    ///
    /// 読み込み済みの画面から始める送信などに使う
    pub fn current(&self) -> Ticket {
        Ticket {
            inner: Arc::clone(&self.inner),
            generation: self.inner.generation.load(Ordering::Acquire),
        }
    }

    /// アンマウント時に呼ぶ
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }
}

impl Ticket {
    /// 結果を反映してよいか
    pub fn is_current(&self) -> bool {
        let current = !self.inner.closed.load(Ordering::Acquire)
            && self.inner.generation.load(Ordering::Acquire) == self.generation;
        if !current {
            log::debug!("discarding stale result (generation {})", self.generation);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_is_current_while_mounted() {
        let scope = MountScope::new();
        let ticket = scope.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_close_invalidates_ticket() {
        let scope = MountScope::new();
        let ticket = scope.begin();
        scope.clone().close();
        assert!(scope.is_closed());
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_newer_load_supersedes_older() {
        let scope = MountScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_current_ticket_is_dropped_by_newer_load() {
        let scope = MountScope::new();
        let load = scope.begin();
        let submit = scope.current();
        assert!(load.is_current());
        assert!(submit.is_current());

        // 送信中にルートのIDが変わった
        let reload = scope.begin();
        assert!(!submit.is_current());
        assert!(reload.is_current());
    }
}
