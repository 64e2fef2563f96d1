//! ナビゲーションバー

use leptos::prelude::*;

#[component]
pub fn Navbar(name: String) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <h1 class="brand">{name}</h1>
                <ul class="nav-links">
                    <li><a href="#projects">"Projects"</a></li>
                    <li><a href="#skills">"Skills"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                </ul>
            </div>
        </nav>
    }
}
