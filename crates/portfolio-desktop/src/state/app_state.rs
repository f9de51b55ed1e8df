//! # Application State
//!
//! Page view state held in Dioxus signals and shared through context.

use dioxus::prelude::*;
use portfolio_core::content::PROFILE;
use portfolio_core::{ApiResult, GitHubClient, PanelController, ScrollTracker, Theme};

use crate::config::Config;

/// View state of the portfolio page.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn ThemeLabel() -> Element {
///     let state = use_context::<AppState>();
///     let theme = state.theme.read();
///
///     rsx! {
///         span { "{theme:?}" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Persisted settings.
    pub config: Signal<Config>,

    /// Active colour scheme.
    pub theme: Signal<Theme>,

    /// Header scroll threshold state.
    pub scroll: Signal<ScrollTracker>,

    /// Projects panel and its load guard.
    pub projects: Signal<PanelController>,
}

impl AppState {
    /// Creates the page state, restoring the theme preference from disk.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();

        Self {
            theme: Signal::new(config.theme),
            config: Signal::new(config),
            scroll: Signal::new(ScrollTracker::default()),
            projects: Signal::new(PanelController::new()),
        }
    }

    /// Creates a [`GitHubClient`] from the configured API URL and timeout.
    ///
    /// Reads the config without subscribing, so effects that build a client
    /// do not rerun when the theme is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> ApiResult<GitHubClient> {
        let config = self.config.peek();
        GitHubClient::with_timeout(config.api_base_url.clone(), config.request_timeout())
    }

    // ==================== Theme ====================

    /// Flips the theme and persists the preference.
    pub fn toggle_theme(&mut self) {
        let theme = self.theme.peek().toggled();
        self.theme.set(theme);

        let mut config = self.config.write();
        config.theme = theme;
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    // ==================== Scroll ====================

    /// Records the window's vertical scroll offset.
    ///
    /// The signal is only written when the header style has to change.
    pub fn observe_scroll(&mut self, offset: f64) {
        let mut tracker = *self.scroll.peek();
        if tracker.observe(offset) {
            tracing::debug!(offset, scrolled = tracker.scrolled(), "Header style changed");
            self.scroll.set(tracker);
        }
    }

    /// Whether the page is scrolled past the header threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll.read().scrolled()
    }

    // ==================== Projects ====================

    /// Starts the one-shot project load for the profile's account.
    ///
    /// Must be called from a component scope; the task is spawned there.
    pub fn start_project_load(&mut self) {
        let ticket = self.projects.write().begin();
        let client = self.client();
        let mut projects = self.projects;

        spawn(async move {
            let result = match client {
                Ok(client) => client.load_projects(PROFILE.github_handle).await,
                Err(e) => Err(e),
            };
            projects.write().complete(ticket, result);
        });
    }

    /// Discards any load still in flight.
    pub fn stop_project_load(&mut self) {
        self.projects.write().teardown();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
