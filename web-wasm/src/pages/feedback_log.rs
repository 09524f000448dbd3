//! フィードバック履歴テーブル

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_client, use_preferences};
use crate::components::{use_mount_scope, ErrorMessage, LoadingMessage};
use gherkin_review_common::view::feedback_log::{self, FeedbackRow};
use gherkin_review_common::{Label, LoadState};

const CELL: &str = "py-2 px-4 border-b";

#[component]
pub fn FeedbackLogPage() -> impl IntoView {
    let client = use_client();
    let prefs = use_preferences();
    let (state, set_state) = signal(LoadState::<Vec<FeedbackRow>>::Loading);

    let ticket = use_mount_scope().begin();
    spawn_local(async move {
        let loaded = feedback_log::load(&client).await;
        if ticket.is_current() {
            set_state.set(loaded);
        }
    });

    view! {
        {move || match state.get() {
            LoadState::Loading => view! { <LoadingMessage /> }.into_any(),
            LoadState::Failed(message) | LoadState::NotFound(message) => {
                view! { <ErrorMessage message=message /> }.into_any()
            }
            LoadState::Ready(rows) => view! {
                <div>
                    <h1 class="text-2xl font-bold mb-4">
                        {move || Label::FeedbackLogTitle.text(prefs.get().language)}
                    </h1>
                    <div class="overflow-x-auto">
                        <table class="min-w-full bg-white dark:bg-gray-800 rounded shadow">
                            <thead>
                                <tr>
                                    <th class=CELL>"ID"</th>
                                    <th class=CELL>"Screenshot ID"</th>
                                    <th class=CELL>"Feature"</th>
                                    <th class=CELL>"Status"</th>
                                    <th class=CELL>"Reason"</th>
                                    <th class=CELL>"Comment"</th>
                                    <th class=CELL>"Created"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| view! { <FeedbackTableRow row=row /> }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn FeedbackTableRow(row: FeedbackRow) -> impl IntoView {
    view! {
        <tr>
            <td class=CELL>{row.id}</td>
            <td class=CELL>{row.screenshot_id}</td>
            <td class=CELL>{row.feature_name}</td>
            <td class=CELL>
                <span class=format!("px-2 py-1 rounded text-xs {}", row.badge_class)>{row.status}</span>
            </td>
            <td class=CELL>{row.reason}</td>
            <td class=CELL>{row.comment}</td>
            <td class=CELL>{row.created}</td>
        </tr>
    }
}
