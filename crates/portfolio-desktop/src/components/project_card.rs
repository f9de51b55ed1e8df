//! # Project Card
//!
//! A single project tile in the projects grid.

use dioxus::prelude::*;
use portfolio_core::Project;

/// Card showing a project's name, description, link and metadata.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "card project-card",

            h3 { class: "card-title", "{project.name}" }
            p { class: "card-description", "{project.description}" }

            div { class: "card-footer",
                a {
                    class: "text-primary",
                    href: "{project.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Ver no GitHub"
                }

                div { class: "meta",
                    if project.has_language() {
                        span { class: "language", "{project.language}" }
                    }
                    span { class: "updated", "Atualizado em {project.updated_at}" }
                }
            }
        }
    }
}
