//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="p-4 text-center text-sm text-gray-500 dark:text-gray-400">
            {format!("© {} Camera TestGen — On-Prem BDD Test Case Generator", year)}
        </footer>
    }
}
