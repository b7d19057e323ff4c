//! Localized user-facing messages

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported message catalogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            _ => Err(Error::invalid_locale(s)),
        }
    }
}

/// Message catalog for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Shown in place of the list when the data source failed
    pub fn load_failed(&self) -> &'static str {
        match self.locale {
            Locale::En => "Failed to load extensions",
            Locale::PtBr => "Erro ao carregar extensões",
        }
    }

    /// Shown when the current filter selects no records
    pub fn empty_filter(&self) -> &'static str {
        match self.locale {
            Locale::En => "No extensions found for this filter",
            Locale::PtBr => "Nenhuma extensão encontrada para este filtro",
        }
    }

    /// Removal confirmation prompt, naming the extension when known
    pub fn confirm_remove(&self, name: Option<&str>) -> String {
        match (self.locale, name) {
            (Locale::En, Some(name)) => {
                format!("Are you sure you want to remove the extension '{}'?", name)
            }
            (Locale::En, None) => "Are you sure you want to remove this extension?".to_string(),
            (Locale::PtBr, Some(name)) => {
                format!("Tem certeza que deseja remover a extensão '{}'?", name)
            }
            (Locale::PtBr, None) => "Tem certeza que deseja remover esta extensão?".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_variants() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("pt_BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("PT-br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_portuguese_catalog() {
        let messages = Messages::new(Locale::PtBr);
        assert_eq!(messages.load_failed(), "Erro ao carregar extensões");
        assert_eq!(
            messages.confirm_remove(None),
            "Tem certeza que deseja remover esta extensão?"
        );
    }

    #[test]
    fn test_prompt_names_extension() {
        let messages = Messages::default();
        assert!(messages.confirm_remove(Some("DevLens")).contains("'DevLens'"));
    }

    #[test]
    fn test_locale_serde_uses_tags() {
        let yaml = serde_yaml_ng::to_string(&Locale::PtBr).unwrap();
        assert_eq!(yaml.trim(), "pt-BR");
    }
}
