//! メインアプリケーションコンポーネント

use leptos::ev;
use leptos::prelude::*;
use portfolio_common::{filter_owned, Action, Portfolio, ProjectRecord, UiState};
use crate::components::{
    contact::ContactSection,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    project_modal::ProjectModal,
    projects::ProjectsSection,
    skills::SkillsSection,
};

/// 操作を状態に適用する（`UiState::update` の可変参照版）
pub fn apply_action(state: &mut UiState, action: Action) {
    let current = std::mem::take(state);
    *state = current.update(action);
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let portfolio = Portfolio::builtin();
    let projects = StoredValue::new(portfolio.projects.clone());

    // UI状態（検索語・選択中プロジェクト）
    let (state, set_state) = signal(UiState::new());
    let dispatch = move |action: Action| set_state.update(|s| apply_action(s, action));

    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let visible = Memo::new(move |_| {
        let query = query.get();
        projects.with_value(|records| filter_owned(records, &query))
    });
    let selected = Memo::new(move |_| state.with(|s| s.selection.selected().cloned()));

    // Escapeでモーダルを閉じる
    let _escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            dispatch(Action::Dismiss);
        }
    });

    let on_query = move |q: String| dispatch(Action::SetQuery(q));
    let on_select = move |record: ProjectRecord| dispatch(Action::Select(record));
    let on_dismiss = move |_: ()| dispatch(Action::Dismiss);

    let profile = portfolio.profile;
    let name = profile.name.clone();
    let availability = profile.availability.clone();
    let highlights = profile.highlights.clone();
    let recipient = profile.email.clone();
    let skills = portfolio.skills;

    view! {
        <div class="page">
            <Navbar name=name.clone() />
            <Hero profile=profile />

            <main class="container">
                <SkillsSection skills=skills />

                <ProjectsSection
                    query=query
                    visible=visible
                    on_query=on_query
                    on_select=on_select
                />

                <ProjectModal selected=selected on_dismiss=on_dismiss />

                <ContactSection
                    availability=availability
                    highlights=highlights
                    recipient=recipient
                />

                <Footer name=name />
            </main>
        </div>
    }
}
