//! メインアプリケーションコンポーネント
//!
//! APIクライアント・準備ゲート・UI設定をコンテキストとして配る。
//! どれもこのコンポーネントのマウント期間だけ生きる。

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::{GlooTransport, WebClient};
use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{DashboardPage, ExportPage, FeedbackLogPage, NotFoundPage, ReviewPage};
use gherkin_review_common::{ClientConfig, Preferences, ReadinessGate, Theme};

/// <html> の "dark" クラスを切り替える
fn apply_document_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force("dark", theme.document_class().is_some());
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::default().with_base_url(option_env!("API_BASE_URL"));
    log::debug!("API base URL: {}", config.base_url);

    let prefs = RwSignal::new(Preferences::default());
    provide_context(prefs);
    provide_context::<WebClient>(WebClient::new(GlooTransport::new(config.timeout_ms), config));
    provide_context(ReadinessGate::new());

    Effect::new(move |_| apply_document_theme(prefs.get().theme));
    on_cleanup(|| apply_document_theme(Theme::Light));

    view! {
        <Router>
            <div class=move || {
                format!("min-h-screen transition-colors duration-200 {}", prefs.get().theme.shell_class())
            }>
                <Navbar />
                <main class="container mx-auto px-4 py-8">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/review/:id") view=ReviewPage />
                        <Route path=path!("/export") view=ExportPage />
                        <Route path=path!("/feedback") view=FeedbackLogPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
