//! フッター

use leptos::prelude::*;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            {format!("Built with Rust + Leptos • © {} {}", year, name)}
        </footer>
    }
}
