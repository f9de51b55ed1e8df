//! # Theme
//!
//! Light/dark colour scheme preference.

use serde::{Deserialize, Serialize};

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Switches to the other theme in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Glyph for the toggle button: a sun in dark mode, a moon in light mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Class applied to the page root.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [Theme::Light, Theme::Dark] {
            let mut theme = start;
            theme.toggle();
            assert_ne!(theme, start);
            theme.toggle();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn test_icon_follows_theme() {
        assert_eq!(Theme::Dark.icon(), "☀");
        assert_eq!(Theme::Light.icon(), "☾");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
