//! エクスポート画面

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_client, use_preferences};
use crate::components::use_mount_scope;
use gherkin_review_common::view::export::{self, ExportState};
use gherkin_review_common::Label;

#[component]
pub fn ExportPage() -> impl IntoView {
    let client = use_client();
    let prefs = use_preferences();
    let scope = use_mount_scope();
    let (state, set_state) = signal(ExportState::Idle);

    let on_export = move |_| {
        if state.get_untracked().is_busy() {
            return;
        }
        set_state.set(ExportState::Exporting);

        let client = client.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let finished = export::run(&client).await;
            if !scope.is_closed() {
                set_state.set(finished);
            }
        });
    };

    let lang = move || prefs.get().language;

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{move || Label::ExportTitle.text(lang())}</h1>
            <p class="mb-4">{move || Label::ExportDescription.text(lang())}</p>
            <button
                class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 disabled:opacity-50"
                disabled=move || state.get().is_busy()
                on:click=on_export
            >
                {move || state.get().button_label(lang())}
            </button>

            {move || match state.get() {
                ExportState::Done(summary) => Some(view! {
                    <div class="mt-4 p-4 bg-green-100 dark:bg-green-900 rounded">
                        <h3 class="font-bold">"Export Successful"</h3>
                        <p>{summary.message.clone()}</p>
                        <p>{summary.files_line()}</p>
                    </div>
                }
                .into_any()),
                ExportState::Failed(message) => Some(view! {
                    <div class="mt-4 p-4 bg-red-100 dark:bg-red-900 rounded">
                        <h3 class="font-bold">"Export Failed"</h3>
                        <p>{message}</p>
                    </div>
                }
                .into_any()),
                ExportState::Idle | ExportState::Exporting => None,
            }}
        </div>
    }
}
