//! Persisted display theme preference.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::Storage;

const THEME_KEY: &str = "theme";

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Raised when parsing an unknown theme name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Theme preference backed by persistent storage.
#[derive(Debug)]
pub struct ThemeStore {
    theme: Theme,
    storage: Storage,
}

impl ThemeStore {
    /// Restore the stored preference, falling back to `default`.
    #[must_use]
    pub fn load(storage: Storage, default: Theme) -> Self {
        let theme = storage.get(THEME_KEY, default);

        Self { theme, storage }
    }

    /// The current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.storage.set(THEME_KEY, &self.theme);
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.inverted());
        self.theme
    }
}
