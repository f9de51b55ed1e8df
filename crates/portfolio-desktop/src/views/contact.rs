//! # Contact Section

use dioxus::prelude::*;
use portfolio_core::content::{Profile, PROFILE};

/// Email, LinkedIn and GitHub links.
#[component]
pub fn Contact() -> Element {
    let mailto = PROFILE.mailto();
    let linkedin = Profile::display_url(PROFILE.linkedin_url);
    let github = Profile::display_url(PROFILE.github_url);

    rsx! {
        section {
            id: "contact",
            class: "section section-last",

            h2 { class: "section-title", "Contato" }

            div { class: "contact-links",
                a { class: "contact-link", href: "{mailto}",
                    span { class: "icon", "✉" }
                    "{PROFILE.email}"
                }

                a {
                    class: "contact-link",
                    href: PROFILE.linkedin_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "icon", "in" }
                    "{linkedin}"
                }

                a {
                    class: "contact-link",
                    href: PROFILE.github_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "icon", "⌥" }
                    "{github}"
                }
            }
        }
    }
}
