//! スキルセクション

use leptos::prelude::*;
use portfolio_common::SkillGroup;

#[component]
pub fn SkillsSection(skills: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <h2>"Skills"</h2>
            <div class="skills-grid">
                {skills
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="skill-card">
                                <h4>{s.group}</h4>
                                <ul class="skill-items">
                                    {s.items
                                        .into_iter()
                                        .map(|item| view! { <li class="skill-pill">{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
