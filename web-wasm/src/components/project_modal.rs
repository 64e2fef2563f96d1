//! プロジェクト詳細モーダル
//!
//! 閉じるボタンまたは背景クリックで閉じる。

use leptos::prelude::*;
use portfolio_common::ProjectRecord;

#[component]
pub fn ProjectModal<FD>(selected: Memo<Option<ProjectRecord>>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        let on_dismiss = on_dismiss.clone();
        selected.get().map(|project| {
            let on_backdrop = on_dismiss.clone();
            let on_close = on_dismiss;
            view! {
                <div class="modal" role="dialog" aria-modal="true">
                    <div class="modal-backdrop" on:click=move |_| on_backdrop(())></div>
                    <div class="modal-content">
                        <img src=project.image().to_string() alt=project.title().to_string() />
                        <div class="modal-body">
                            <h3>{project.title().to_string()}</h3>
                            <p class="project-stack">{project.stack().to_string()}</p>
                            <p class="project-description">{project.description().to_string()}</p>
                            <div class="modal-actions">
                                <a href=project.repository_link().to_string() class="btn btn-secondary">
                                    "View Code"
                                </a>
                                <a href=project.live_link().to_string() class="btn btn-primary">
                                    "Open Live"
                                </a>
                                <button class="btn btn-tertiary" on:click=move |_| on_close(())>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
