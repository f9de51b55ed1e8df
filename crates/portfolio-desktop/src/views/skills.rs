//! # Skills Section

use dioxus::prelude::*;
use portfolio_core::content::SKILLS;

/// Skill categories, one card each.
#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: "skills",
            class: "section",

            h2 { class: "section-title", "Habilidades" }

            div { class: "card-grid",
                for skill in SKILLS {
                    div { class: "card",
                        h3 { class: "card-title", "{skill.category}" }

                        div { class: "badge-list",
                            for item in skill.items {
                                span { class: skill.tone.css_class(), "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
