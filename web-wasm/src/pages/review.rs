//! レビュー画面: 画像とGherkinを並べて承認/却下

use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::api::{use_client, use_preferences, use_readiness};
use crate::components::{use_mount_scope, ErrorMessage, LoadingMessage};
use gherkin_review_common::view::review::{self, Decision, ReviewForm};
use gherkin_review_common::{Label, LoadState, RejectionReason, Screenshot, ScreenshotStatus};

#[component]
pub fn ReviewPage() -> impl IntoView {
    let client = use_client();
    let config = client.config().clone();
    let gate = use_readiness();
    let params = use_params_map();
    let navigate = use_navigate();
    let scope = use_mount_scope();

    let (state, set_state) = signal(LoadState::<Screenshot>::Loading);
    let form = RwSignal::new(ReviewForm::default());

    // ルートのIDが変わるたびに読み直す（古い結果は捨てる）
    Effect::new({
        let client = client.clone();
        let scope = scope.clone();
        move |_| {
            let raw_id = params
                .with(|p| p.get("id").map(|id| id.to_string()))
                .unwrap_or_default();
            set_state.set(LoadState::Loading);
            form.set(ReviewForm::default());

            let ticket = scope.begin();
            let client = client.clone();
            let gate = gate.clone();
            spawn_local(async move {
                let loaded = review::load(&client, &gate, &raw_id).await;
                if ticket.is_current() {
                    set_state.set(loaded);
                }
            });
        }
    });

    let on_decide = move |decision: Decision| {
        let Some(id) = state.with_untracked(|s| s.ready().map(|s| s.id)) else {
            return;
        };
        let request = match form.try_update(|f| f.begin(decision, id)) {
            Some(Ok(request)) => request,
            Some(Err(blocked)) => {
                if let Some(prompt) = blocked.prompt() {
                    alert(prompt);
                }
                return;
            }
            None => return,
        };

        // 送信中にIDが変わる・アンマウントされたら結果は捨てる
        let ticket = scope.current();
        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = client.submit_feedback(&request).await;
            if !ticket.is_current() {
                return;
            }
            if let Some(outcome) = form.try_update(|f| f.finish(decision, result)) {
                outcome.apply(|to| navigate(to, NavigateOptions::default()), alert);
            }
        });
    };

    view! {
        {move || match state.get() {
            LoadState::Loading => view! { <LoadingMessage /> }.into_any(),
            LoadState::Failed(message) => view! { <ErrorMessage message=message /> }.into_any(),
            LoadState::NotFound(message) => view! {
                <div class="text-center p-8">
                    <p>{message}</p>
                    <a href="/" class="mt-2 inline-block text-blue-500 hover:underline">"Back to Dashboard"</a>
                </div>
            }
            .into_any(),
            LoadState::Ready(screenshot) => {
                let image_url = config.image_url(&screenshot.filename);
                view! {
                    <ReviewBody
                        screenshot=screenshot
                        image_url=image_url
                        form=form
                        on_decide=on_decide.clone()
                    />
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn ReviewBody<F>(
    screenshot: Screenshot,
    image_url: String,
    form: RwSignal<ReviewForm>,
    on_decide: F,
) -> impl IntoView
where
    F: Fn(Decision) + 'static + Clone + Send,
{
    let prefs = use_preferences();
    let lang = move || prefs.get().language;
    let in_flight = move || form.with(|f| f.in_flight);
    let is_rejected = screenshot.status == ScreenshotStatus::Rejected;

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">
                {move || Label::ReviewTitle.text(lang())} ": " {screenshot.feature_name.clone()}
            </h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="p-4 rounded shadow-md bg-white dark:bg-gray-800">
                    <h2 class="font-bold">"Screenshot"</h2>
                    <img
                        src=image_url
                        alt=screenshot.filename.clone()
                        class="mt-2 max-w-full h-auto rounded"
                    />
                    <p class="mt-2 text-sm text-gray-500">"File: " {screenshot.filename.clone()}</p>
                    <p class="text-sm text-gray-500">"Status: " {screenshot.status.as_str()}</p>
                    {screenshot.version.map(|v| view! {
                        <p class="text-sm text-gray-500">"Version: " {v}</p>
                    })}
                </div>
                <div class="p-4 rounded shadow-md bg-white dark:bg-gray-800">
                    <h2 class="font-bold">"Generated Gherkin"</h2>
                    <pre class="mt-2 p-2 bg-gray-100 dark:bg-gray-700 rounded overflow-auto text-sm">
                        {screenshot.gherkin_or_placeholder().to_string()}
                    </pre>
                    <div class="mt-4">
                        <button
                            class="mr-2 px-4 py-2 bg-green-500 text-white rounded hover:bg-green-600 disabled:opacity-50"
                            disabled=in_flight
                            on:click={
                                let on_decide = on_decide.clone();
                                move |_| on_decide(Decision::Accept)
                            }
                        >
                            {move || {
                                let label = if in_flight() { Label::Accepting } else { Label::Accept };
                                label.text(lang())
                            }}
                        </button>
                        <button
                            class="px-4 py-2 bg-red-500 text-white rounded hover:bg-red-600 disabled:opacity-50"
                            disabled=in_flight
                            on:click={
                                let on_decide = on_decide.clone();
                                move |_| on_decide(Decision::Reject)
                            }
                        >
                            {move || {
                                let label = if in_flight() { Label::Rejecting } else { Label::Reject };
                                label.text(lang())
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <AnalysisPanel screenshot=screenshot.clone() />

            {if is_rejected {
                view! { <RejectionDetails screenshot=screenshot.clone() /> }.into_any()
            } else {
                view! { <RejectForm form=form /> }.into_any()
            }}
        </div>
    }
}

/// 抽出されたジェスチャー・条件・エラー・言語
#[component]
fn AnalysisPanel(screenshot: Screenshot) -> impl IntoView {
    let sections = [
        ("Gestures", screenshot.gesture_summaries()),
        ("Conditions", screenshot.conditions.clone()),
        ("Errors", screenshot.errors.clone()),
        ("Languages", screenshot.languages.clone()),
    ];

    view! {
        <div class="mt-4 p-4 rounded shadow-md bg-white dark:bg-gray-800 grid grid-cols-2 md:grid-cols-4 gap-4">
            {sections
                .into_iter()
                .map(|(title, items)| view! {
                    <div>
                        <h3 class="font-bold text-sm">{title}</h3>
                        {if items.is_empty() {
                            view! { <p class="text-sm text-gray-500">"-"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="text-sm list-disc list-inside">
                                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RejectionDetails(screenshot: Screenshot) -> impl IntoView {
    view! {
        <div class="mt-4 p-4 bg-red-100 dark:bg-red-900 rounded">
            <h3 class="font-bold">"Rejection Details"</h3>
            <p><strong>"Reason: "</strong> {screenshot.rejection_reason.unwrap_or_default()}</p>
            <p><strong>"Comment: "</strong> {screenshot.comment.unwrap_or_default()}</p>
        </div>
    }
}

#[component]
fn RejectForm(form: RwSignal<ReviewForm>) -> impl IntoView {
    view! {
        <div class="mt-4 p-4 bg-gray-100 dark:bg-gray-700 rounded">
            <h3 class="font-bold">"Reject Test Case"</h3>
            <select
                class="mt-2 p-2 border rounded w-full"
                prop:value=move || form.with(|f| f.reason.map(|r| r.label()).unwrap_or(""))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.select_reason(&value));
                }
            >
                <option value="">"Select reason..."</option>
                {RejectionReason::ALL
                    .iter()
                    .map(|reason| view! { <option value=reason.label()>{reason.label()}</option> })
                    .collect_view()}
            </select>
            <textarea
                class="mt-2 p-2 border rounded w-full"
                rows=3
                placeholder="Add optional comment..."
                prop:value=move || form.with(|f| f.comment.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.comment = value);
                }
            />
        </div>
    }
}
