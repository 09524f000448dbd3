//! ナビゲーションバー（テーマ・言語の切り替え）

use leptos::prelude::*;

use crate::api::use_preferences;
use gherkin_review_common::Label;

#[component]
pub fn Navbar() -> impl IntoView {
    let prefs = use_preferences();
    let lang = move || prefs.get().language;

    view! {
        <nav class=move || format!("p-4 shadow-md {}", prefs.get().theme.navbar_class())>
            <div class="container mx-auto flex justify-between items-center">
                <a href="/" class="text-xl font-bold">"📸 Camera TestGen"</a>
                <div class="flex space-x-4 items-center">
                    <a href="/" class="hover:underline">{move || Label::NavDashboard.text(lang())}</a>
                    <a href="/export" class="hover:underline">{move || Label::NavExport.text(lang())}</a>
                    <a href="/feedback" class="hover:underline">{move || Label::NavFeedback.text(lang())}</a>
                    <button
                        class="px-3 py-1 rounded bg-gray-200 dark:bg-gray-700 text-sm"
                        on:click=move |_| prefs.update(|p| p.toggle_language())
                    >
                        {move || lang().toggle_label()}
                    </button>
                    <button
                        class="px-3 py-1 rounded bg-gray-200 dark:bg-gray-700"
                        on:click=move |_| prefs.update(|p| p.toggle_theme())
                    >
                        {move || prefs.get().theme.toggle_icon()}
                    </button>
                </div>
            </div>
        </nav>
    }
}
