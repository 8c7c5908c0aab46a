// src/types/state.rs
//! Per-render application state: active language, theme and the reference date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    /// Label shown on the language toggle
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ar => "العربية",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "ar" => Ok(Lang::Ar),
            other => anyhow::bail!("Unsupported language: {}. Use en or ar", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parse a persisted preference, falling back to dark for anything unknown
    pub fn from_preference(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable state read by every renderer. Toggles build a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub lang: Lang,
    pub theme: Theme,
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(lang: Lang, theme: Theme, today: NaiveDate) -> Self {
        Self { lang, theme, today }
    }

    /// State for the current local date
    pub fn today(lang: Lang, theme: Theme) -> Self {
        Self::new(lang, theme, chrono::Local::now().date_naive())
    }

    pub fn with_lang(self, lang: Lang) -> Self {
        Self { lang, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn with_language_toggled(self) -> Self {
        self.with_lang(self.lang.toggled())
    }

    pub fn with_theme_toggled(self) -> Self {
        self.with_theme(self.theme.toggled())
    }
}
