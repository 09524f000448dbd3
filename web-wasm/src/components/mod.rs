//! 共通コンポーネント

pub mod footer;
pub mod navbar;
pub mod status;

pub use status::{ErrorMessage, LoadingMessage};

use gherkin_review_common::MountScope;
use leptos::prelude::*;

/// 現在のコンポーネントのマウント期間に紐づくスコープ
pub fn use_mount_scope() -> MountScope {
    let scope = MountScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });
    scope
}
