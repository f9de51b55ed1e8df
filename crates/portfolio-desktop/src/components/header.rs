//! # Header Component
//!
//! Fixed page header with branding, section links and the theme toggle.

use dioxus::prelude::*;
use portfolio_core::content::PROFILE;

use crate::state::AppState;
use crate::PROFILE_PHOTO;

/// In-page navigation targets.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#projects", "Projetos"),
    ("#skills", "Habilidades"),
    ("#formations", "Formações"),
    ("#contact", "Contato"),
];

/// Page header component.
///
/// Turns solid once the page scrolls past the header threshold.
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();

    let header_class = if state.is_scrolled() {
        "page-header scrolled"
    } else {
        "page-header"
    };

    rsx! {
        header {
            class: "{header_class}",

            div { class: "header-inner",
                div { class: "brand",
                    img {
                        class: "avatar-sm",
                        src: PROFILE_PHOTO,
                        alt: PROFILE.name,
                    }
                    span { class: "brand-name", "{PROFILE.name}" }
                }

                nav { class: "nav-links",
                    for (href, label) in NAV_LINKS {
                        a { class: "nav-link", href: href, "{label}" }
                    }

                    ThemeToggle {}
                }

                // Narrow windows hide the nav; keep the toggle reachable.
                div { class: "mobile-toggle",
                    ThemeToggle {}
                }
            }
        }
    }
}

/// Button that flips between light and dark mode.
#[component]
fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let theme = *state.theme.read();

    rsx! {
        button {
            class: "theme-toggle btn-ghost",
            title: "Alternar tema",
            onclick: move |_| state.toggle_theme(),
            "{theme.icon()}"
        }
    }
}
