//! Filter selection

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ExtensionRecord;

/// Which records the view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every record
    #[default]
    All,
    /// Only records with `is_active = true`
    Active,
    /// Only records with `is_active = false`
    Inactive,
}

impl Filter {
    /// All filter values in the order the filter bar shows them
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Inactive];

    /// Wire/label form of the filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Inactive => "inactive",
        }
    }

    /// Whether a record belongs in this filter's view
    pub fn matches(&self, record: &ExtensionRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => record.is_active,
            Filter::Inactive => !record.is_active,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "inactive" => Ok(Filter::Inactive),
            _ => Err(Error::invalid_filter(s)),
        }
    }
}
