//! # Formations Section

use dioxus::prelude::*;
use portfolio_core::content::FORMATIONS;

/// Completed course tracks.
#[component]
pub fn Formations() -> Element {
    rsx! {
        section {
            id: "formations",
            class: "section",

            h2 { class: "section-title", "Formações" }

            div { class: "card-grid",
                for formation in FORMATIONS {
                    div { class: "card",
                        h3 { class: "card-title", "{formation.title}" }

                        div { class: "card-row text-secondary",
                            span { "{formation.platform}" }
                            span { "{formation.hours}" }
                        }

                        div { class: "meta", "{formation.date}" }
                    }
                }
            }
        }
    }
}
