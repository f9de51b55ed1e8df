//! # Hero Section
//!
//! Photo, headline, calls to action and headline stats.

use dioxus::prelude::*;
use portfolio_core::content::{PROFILE, STATS};

use crate::PROFILE_PHOTO;

/// Hero section at the top of the page.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",

            img {
                class: "avatar-lg",
                src: PROFILE_PHOTO,
                alt: PROFILE.name,
            }

            span { class: "badge badge-gradient", "{PROFILE.role}" }

            h1 { class: "hero-title", "{PROFILE.headline}" }

            p { class: "hero-bio text-secondary", "{PROFILE.bio}" }

            div { class: "btn-group hero-actions",
                a { class: "btn-primary", href: "#projects", "Ver Meus Projetos ↗" }
                a { class: "btn-outline", href: "#contact", "Entre em Contato ✉" }
            }

            div { class: "stats",
                for stat in STATS {
                    div { class: "stat",
                        div { class: "stat-value", "{stat.value}" }
                        div { class: "stat-label text-secondary", "{stat.label}" }
                    }
                }
            }
        }
    }
}
