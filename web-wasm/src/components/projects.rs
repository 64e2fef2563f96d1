//! プロジェクトセクション（検索欄 + カード一覧）

use leptos::prelude::*;
use portfolio_common::ProjectRecord;

#[component]
pub fn ProjectsSection<FQ, FS>(
    query: Memo<String>,
    visible: Memo<Vec<ProjectRecord>>,
    on_query: FQ,
    on_select: FS,
) -> impl IntoView
where
    FQ: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(ProjectRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <section id="projects" class="projects">
            <div class="projects-header">
                <h2>"Selected Projects"</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| on_query(event_target_value(&ev))
                />
            </div>

            <div class="projects-grid">
                <For
                    each=move || visible.get()
                    key=|project| project.title().to_string()
                    children=move |project| {
                        let on_select = on_select.clone();
                        view! { <ProjectCard project=project on_select=on_select /> }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard<FS>(project: ProjectRecord, on_select: FS) -> impl IntoView
where
    FS: Fn(ProjectRecord) + 'static + Clone + Send + Sync,
{
    let title = project.title().to_string();
    let image = project.image().to_string();
    let stack = project.stack().to_string();
    let description = project.description().to_string();
    let repository_link = project.repository_link().to_string();
    let live_link = project.live_link().to_string();

    view! {
        <article class="project-card">
            <img src=image alt=title.clone() />
            <div class="project-info">
                <h3>{title}</h3>
                <p class="project-stack">{stack}</p>
                <p class="project-description">{description}</p>
                <div class="project-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click=move |_| on_select(project.clone())
                    >
                        "View Details"
                    </button>
                    <a href=repository_link target="_blank" rel="noreferrer">"Code"</a>
                    <a href=live_link target="_blank" rel="noreferrer">"Live"</a>
                </div>
            </div>
        </article>
    }
}
