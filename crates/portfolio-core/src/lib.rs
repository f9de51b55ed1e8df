//! # Portfolio Core
//!
//! Data loading and view-state logic for the portfolio page, kept free of
//! any UI dependency.
//!
//! ## Modules
//!
//! - [`client`] - Repository loader for the hosting API
//! - [`content`] - Static page content and the fallback projects
//! - [`panel`] - Projects panel state machine
//! - [`scroll`] - Header scroll threshold
//! - [`theme`] - Light/dark preference

pub mod client;
pub mod content;
pub mod error;
pub mod panel;
pub mod scroll;
pub mod theme;
pub mod types;

pub use client::{GitHubClient, DEFAULT_API_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use panel::{LoadTicket, PanelController, ProjectPanel};
pub use scroll::ScrollTracker;
pub use theme::Theme;
pub use types::{Project, RepoRecord};
