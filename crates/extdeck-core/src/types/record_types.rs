//! Extension record types

use serde::{Deserialize, Serialize};

/// One element of a data source payload
///
/// Fields beyond these four are accepted and ignored, including any `id`:
/// identifiers are always assigned by position at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExtension {
    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Logo image URL
    pub logo: String,

    /// Whether the extension starts out active
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl RawExtension {
    /// Create a raw record
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            is_active,
        }
    }
}

/// An extension held in the in-memory list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
    /// Positional identifier assigned at load time
    pub id: usize,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Logo image URL as delivered by the data source
    pub logo: String,

    /// Active/inactive state, flipped by the toggle command
    pub is_active: bool,
}

impl ExtensionRecord {
    /// Build a record from a raw payload element and its position
    pub fn from_raw(id: usize, raw: RawExtension) -> Self {
        Self {
            id,
            name: raw.name,
            description: raw.description,
            logo: raw.logo,
            is_active: raw.is_active,
        }
    }

    /// Assign sequential ids (0-based, by position) to a loaded sequence
    pub fn assign_ids(raw: Vec<RawExtension>) -> Vec<Self> {
        raw.into_iter()
            .enumerate()
            .map(|(id, ext)| Self::from_raw(id, ext))
            .collect()
    }
}
