//! # UI Components
//!
//! Reusable UI components for the portfolio page.
//!
//! - [`Header`] - Fixed header with navigation and theme toggle
//! - [`ProjectCard`] - Single project tile

mod header;
mod project_card;

pub use header::Header;
pub use project_card::ProjectCard;
