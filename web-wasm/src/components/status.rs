//! 読み込み中・エラー表示

use leptos::prelude::*;

use crate::api::use_preferences;
use gherkin_review_common::Label;

#[component]
pub fn LoadingMessage() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <div class="text-center p-8">{move || Label::Loading.text(prefs.get().language)}</div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="text-center p-8 text-red-500">{format!("Error: {}", message)}</div>
    }
}
