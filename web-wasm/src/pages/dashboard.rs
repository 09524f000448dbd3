//! ダッシュボード: スクリーンショットのカード一覧

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_client, use_preferences, use_readiness};
use crate::components::{use_mount_scope, ErrorMessage, LoadingMessage};
use gherkin_review_common::view::dashboard::{self, DashboardCard};
use gherkin_review_common::{Label, LoadState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_client();
    let gate = use_readiness();
    let prefs = use_preferences();
    let (state, set_state) = signal(LoadState::<Vec<DashboardCard>>::Loading);

    let ticket = use_mount_scope().begin();
    spawn_local(async move {
        let loaded = dashboard::load(&client, &gate).await;
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
            LoadState::Ready(cards) => view! {
                <div>
                    <h1 class="text-2xl font-bold mb-4">
                        {move || Label::DashboardTitle.text(prefs.get().language)}
                    </h1>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {cards
                            .into_iter()
                            .map(|card| view! { <ScreenshotCard card=card /> })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn ScreenshotCard(card: DashboardCard) -> impl IntoView {
    let prefs = use_preferences();

    view! {
        <div class=format!("p-4 rounded shadow-md {}", card.card_class)>
            <h2 class="font-bold">{card.feature_name}</h2>
            <p class="text-sm text-gray-500">"File: " {card.filename}</p>
            <p class="text-sm text-gray-500">"Status: " {card.status}</p>
            <p class="text-sm text-gray-500">"Created: " {card.created}</p>
            <a
                href=card.review_href
                class="mt-2 inline-block px-3 py-1 bg-blue-500 text-white rounded hover:bg-blue-600"
            >
                {move || Label::Review.text(prefs.get().language)}
            </a>
        </div>
    }
}
