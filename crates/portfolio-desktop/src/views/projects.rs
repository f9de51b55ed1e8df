//! # Projects Section
//!
//! Live project listing with fallback to the static list.

use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::state::AppState;

/// Projects section.
///
/// Starts the repository load once on mount and discards its result if the
/// section is gone before it arrives.
#[component]
pub fn Projects() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || state.start_project_load());
    use_drop(move || state.stop_project_load());

    let controller = state.projects.read();
    let panel = controller.panel();

    rsx! {
        section {
            id: "projects",
            class: "section",

            h2 { class: "section-title", "Projetos" }

            if panel.is_loading() {
                p { class: "loading", "Carregando projetos..." }
            }

            if let Some(message) = panel.error() {
                p { class: "alert alert-error", "{message}" }
            }

            div { class: "card-grid",
                for project in panel.projects() {
                    ProjectCard { key: "{project.url}", project: project.clone() }
                }
            }
        }
    }
}
