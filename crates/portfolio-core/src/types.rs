//! # Project Types
//!
//! Repository records as returned by the hosting API and the display-ready
//! projects derived from them.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Deserialize;

/// Description shown for repositories that have none.
pub const DESCRIPTION_PLACEHOLDER: &str = "Sem descrição";

/// Brasília time, used for every date shown on the page.
const BRASILIA_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// A repository as returned by `GET /users/{handle}/repos`.
///
/// Only the fields the page needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoRecord {
    /// Repository ID.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Primary language, if the host detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Whether the repository is archived.
    #[serde(default)]
    pub archived: bool,
}

impl RepoRecord {
    /// Returns true if the repository is original, active work.
    ///
    /// Forks and archived repositories never reach the page.
    #[must_use]
    pub fn is_showcased(&self) -> bool {
        !self.fork && !self.archived
    }
}

/// A project card as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Description, or [`DESCRIPTION_PLACEHOLDER`].
    pub description: String,
    /// Link to the project.
    pub url: String,
    /// Primary language; empty when unknown.
    pub language: String,
    /// Last update, formatted `DD/MM/YYYY`.
    pub updated_at: String,
}

impl Project {
    /// Returns true if a language label should be shown.
    #[must_use]
    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }
}

impl From<&RepoRecord> for Project {
    fn from(repo: &RepoRecord) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            url: repo.html_url.clone(),
            language: repo.language.clone().unwrap_or_default(),
            updated_at: format_date(repo.updated_at),
        }
    }
}

/// Keeps showcased records and maps them to projects, preserving order.
#[must_use]
pub fn showcase(records: &[RepoRecord]) -> Vec<Project> {
    records
        .iter()
        .filter(|r| r.is_showcased())
        .map(Project::from)
        .collect()
}

/// Formats a timestamp the way pt-BR dates are written (`DD/MM/YYYY`),
/// in Brasília time.
#[must_use]
pub fn format_date(ts: DateTime<Utc>) -> String {
    let brasilia = FixedOffset::west_opt(BRASILIA_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    ts.with_timezone(&brasilia).format("%d/%m/%Y").to_string()
}
