//! # Project Panel
//!
//! View state of the projects section and the one-shot load that drives it.
//!
//! ```text
//!            Ok(projects)
//! Loading ─────────────────▶ Loaded(projects)
//!    │
//!    │ Err(_)
//!    └────────────────────▶ Degraded { message, fallback }
//! ```

use crate::content::{fallback_projects, DEGRADED_MESSAGE};
use crate::error::ApiResult;
use crate::types::Project;

/// State of the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectPanel {
    /// Waiting for the loader.
    #[default]
    Loading,
    /// Projects came from the API.
    Loaded(Vec<Project>),
    /// The API was unreachable; showing static projects.
    Degraded {
        /// User-facing message.
        message: String,
        /// Static fallback projects.
        projects: Vec<Project>,
    },
}

impl ProjectPanel {
    /// Converts a load result into the terminal panel state.
    ///
    /// Errors are logged here and never propagated further.
    #[must_use]
    pub fn settle(result: ApiResult<Vec<Project>>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(e) => {
                tracing::error!(error = %e, "Could not load projects, showing fallback list");
                Self::Degraded {
                    message: DEGRADED_MESSAGE.to_string(),
                    projects: fallback_projects(),
                }
            }
        }
    }

    /// Returns true while the load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-facing error message, if degraded.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Degraded { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Projects to render.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loading => &[],
            Self::Loaded(projects) | Self::Degraded { projects, .. } => projects.as_slice(),
        }
    }
}

/// Handle for one load attempt, returned by [`PanelController::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns the panel and discards results that arrive for a stale attempt or
/// after teardown.
#[derive(Debug, Clone, Default)]
pub struct PanelController {
    panel: ProjectPanel,
    generation: u64,
    torn_down: bool,
}

impl PanelController {
    /// Creates a controller in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current panel state.
    #[must_use]
    pub fn panel(&self) -> &ProjectPanel {
        &self.panel
    }

    /// Starts a load attempt, resetting the panel to `Loading`.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.torn_down = false;
        self.panel = ProjectPanel::Loading;
        LoadTicket(self.generation)
    }

    /// Applies the result of the attempt identified by `ticket`.
    ///
    /// Returns false, leaving the panel untouched, if the ticket is stale or
    /// the controller was torn down.
    pub fn complete(&mut self, ticket: LoadTicket, result: ApiResult<Vec<Project>>) -> bool {
        if !self.accepts(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                torn_down = self.torn_down,
                "Discarding stale project load"
            );
            return false;
        }

        self.panel = ProjectPanel::settle(result);
        true
    }

    /// Returns true if a result for `ticket` would still be applied.
    #[must_use]
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        !self.torn_down && ticket.0 == self.generation
    }

    /// Invalidates every outstanding ticket.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}
