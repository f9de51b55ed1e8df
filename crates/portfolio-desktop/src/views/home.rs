//! # Home View
//!
//! The whole portfolio page.

use dioxus::prelude::*;

use super::{Contact, Formations, Hero, Projects, Skills};
use crate::components::Header;
use crate::state::AppState;

/// Forwards the window's vertical scroll offset to Rust on every scroll.
const SCROLL_LISTENER: &str = r#"
    window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
    dioxus.send(window.scrollY);
"#;

/// Portfolio page.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Header (fixed, solid once scrolled)         |
/// |---------------------------------------------|
/// | Hero                                        |
/// | Projetos     (#projects)                    |
/// | Habilidades  (#skills)                      |
/// | Formações    (#formations)                  |
/// | Contato      (#contact)                     |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let theme = *state.theme.read();

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        loop {
            match listener.recv::<f64>().await {
                Ok(offset) => state.observe_scroll(offset),
                Err(e) => {
                    tracing::warn!("Scroll listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        div {
            class: "page {theme.css_class()}",

            Header {}

            main {
                class: "content",

                Hero {}
                Projects {}
                Skills {}
                Formations {}
                Contact {}
            }
        }
    }
}
