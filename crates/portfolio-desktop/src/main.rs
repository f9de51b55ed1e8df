//! # Portfolio Desktop
//!
//! Personal portfolio page rendered in a native window.
//!
//! ## Architecture
//!
//! Static content and the project loading logic live in `portfolio-core`;
//! this binary holds the view state in Dioxus signals and renders it.
//!
//! ## Modules
//!
//! - [`components`] - Reusable UI components
//! - [`config`] - Persisted settings
//! - [`state`] - Page view state
//! - [`views`] - Page sections

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use portfolio_core::content::PROFILE;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod config;
mod state;
mod views;

use state::AppState;
use views::Home;

/// Profile photo shown in the header and hero.
const PROFILE_PHOTO: Asset = asset!("/assets/profile.svg");

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting portfolio");

    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title(PROFILE.name)
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(360.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides the page state and loads the stylesheet.
#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Home {}
    }
}
