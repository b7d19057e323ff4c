//! Presentation theme

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single toggleable presentation class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured starting theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Follow the terminal's reported background
    #[default]
    Auto,
}

impl ThemePreference {
    /// Resolve the starting theme
    ///
    /// `colorfgbg` is the value of the `COLORFGBG` environment variable
    /// (`"<fg>;<bg>"`), which terminals use to advertise their palette.
    /// Backgrounds 7 and 15 are light.
    pub fn resolve(self, colorfgbg: Option<&str>) -> Theme {
        match self {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
            ThemePreference::Auto => {
                let background = colorfgbg
                    .and_then(|v| v.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                match background {
                    Some(7) | Some(15) => Theme::Light,
                    _ => Theme::Dark,
                }
            }
        }
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            "auto" => Ok(ThemePreference::Auto),
            _ => Err(Error::invalid_theme(s)),
        }
    }
}
