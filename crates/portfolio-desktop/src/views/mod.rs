//! # Views
//!
//! Page sections of the portfolio.
//!
//! - [`Home`] - The page, composing every section below
//! - [`Hero`] - Photo, headline and stats
//! - [`Projects`] - Live project listing
//! - [`Skills`] - Skill categories
//! - [`Formations`] - Completed courses
//! - [`Contact`] - Contact links

mod contact;
mod formations;
mod hero;
mod home;
mod projects;
mod skills;

pub use contact::Contact;
pub use formations::Formations;
pub use hero::Hero;
pub use home::Home;
pub use projects::Projects;
pub use skills::Skills;
