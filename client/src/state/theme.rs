//! Color theme preference.
//!
//! DESIGN
//! ======
//! The stored preference may be `System`, which only becomes light or dark
//! once combined with the browser's `prefers-color-scheme`. Keeping the two
//! steps apart lets the toggle cycle through all three choices.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// User-selected theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system setting.
    #[default]
    System,
}

impl Theme {
    /// Parse a stored preference. Unknown values fall back to `System`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Toggle order: light, dark, system, light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Concrete scheme to apply given the system preference.
    #[must_use]
    pub fn resolve(self, system_prefers_dark: bool) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System if system_prefers_dark => ColorScheme::Dark,
            Self::System => ColorScheme::Light,
        }
    }

    /// Icon shown on the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::System => "◐",
        }
    }
}

/// The scheme actually applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Class placed on `<html>`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
