//! ヒーローセクション（自己紹介・ポートレート）

use leptos::prelude::*;
use portfolio_common::Profile;

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    let portrait_alt = profile.name.clone();

    view! {
        <header class="hero">
            <div class="hero-text">
                <h1>"Hi, I'm " <span class="accent">{profile.name}</span></h1>
                <p class="bio">{profile.bio}</p>

                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"View Projects"</a>
                    <a href="#contact" class="btn btn-secondary">"Contact Me"</a>
                </div>

                <div class="hero-links">
                    <a href=profile.github_url aria-label="GitHub">"GitHub"</a>
                    <a href=mailto aria-label="Email">"Email"</a>
                </div>
            </div>

            <div class="portrait-card">
                <img src=profile.portrait alt=portrait_alt />
                <div class="portrait-caption">
                    <h3>{profile.headline}</h3>
                    <p class="text-muted">{profile.tagline}</p>
                </div>
            </div>
        </header>
    }
}
