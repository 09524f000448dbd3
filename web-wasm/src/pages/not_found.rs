use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="text-center p-8">
            <h1 class="text-2xl font-bold mb-4">"Page not found"</h1>
            <a href="/" class="px-3 py-1 bg-blue-500 text-white rounded hover:bg-blue-600">
                "Back to Dashboard"
            </a>
        </div>
    }
}
