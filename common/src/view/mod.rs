//! 画面ごとの状態とデータ取得手順
//!
//! Web(Leptos)とCLIの両方から使う。描画は持たない。

pub mod dashboard;
pub mod export;
pub mod feedback_log;
pub mod review;

/// 画面の読み込み状態
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// 取得は成功したが対象がない（Review画面のみ）
    NotFound(String),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
