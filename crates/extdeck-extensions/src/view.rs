//! Pure projection of the extension list into a renderable frame
//!
//! Nothing in here touches controller state or performs output: the
//! controller calls [`Frame::project`] after every mutation and hands the
//! result to its [`Renderer`](crate::Renderer).

use extdeck_core::{ExtensionRecord, Filter, Messages};
use serde::Serialize;

use crate::command::Command;

/// Static image shown with the empty-state placeholder
pub const EMPTY_STATE_IMAGE: &str = "./assets/images/empty-state.png";

/// Base of the generated placeholder logo (48x48, brand background)
const PLACEHOLDER_LOGO_BASE: &str = "https://via.placeholder.com/48x48/667eea/ffffff";

/// Records selected by a filter, in list order
pub fn filter_records(records: &[ExtensionRecord], filter: Filter) -> Vec<&ExtensionRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Placeholder logo showing the first character of the name
///
/// Substituted by the rendering boundary when the record's own logo
/// cannot be resolved; never written back into the record.
pub fn fallback_logo(name: &str) -> String {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string());
    let encoded: String = url::form_urlencoded::byte_serialize(initial.as_bytes()).collect();
    format!("{}?text={}", PLACEHOLDER_LOGO_BASE, encoded)
}

/// Visual representation of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub fallback_logo: String,
    pub logo_alt: String,
    pub is_active: bool,
    /// Bound to the card's remove button
    pub remove: Command,
    /// Bound to the card's toggle switch
    pub toggle: Command,
}

impl Card {
    /// Project one record
    pub fn from_record(record: &ExtensionRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            logo: record.logo.clone(),
            fallback_logo: fallback_logo(&record.name),
            logo_alt: format!("{} logo", record.name),
            is_active: record.is_active,
            remove: Command::Remove(record.id),
            toggle: Command::Toggle(record.id),
        }
    }

    /// Style class of the card
    pub fn state_class(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// What the container shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum View {
    /// One card per record matching the filter
    Cards { cards: Vec<Card> },
    /// The filter matched nothing
    Empty { message: String, image: String },
    /// The data source could not be loaded
    LoadFailed { message: String, image: String },
}

impl View {
    /// Project the list under a filter
    pub fn project(records: &[ExtensionRecord], filter: Filter, messages: &Messages) -> Self {
        let cards: Vec<Card> = filter_records(records, filter)
            .into_iter()
            .map(Card::from_record)
            .collect();

        if cards.is_empty() {
            View::Empty {
                message: messages.empty_filter().to_string(),
                image: EMPTY_STATE_IMAGE.to_string(),
            }
        } else {
            View::Cards { cards }
        }
    }

    /// The load-error placeholder
    pub fn load_failed(messages: &Messages) -> Self {
        View::LoadFailed {
            message: messages.load_failed().to_string(),
            image: EMPTY_STATE_IMAGE.to_string(),
        }
    }

    /// Cards on screen (empty for placeholders)
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Cards { cards } => cards,
            View::Empty { .. } | View::LoadFailed { .. } => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, View::Cards { .. })
    }
}

/// One filter-selection control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub filter: Filter,
    pub selected: bool,
}

/// The row of filter-selection controls; exactly one is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBar {
    pub tabs: Vec<FilterTab>,
}

impl FilterBar {
    pub fn new(selected: Filter) -> Self {
        Self {
            tabs: Filter::ALL
                .iter()
                .map(|&filter| FilterTab {
                    filter,
                    selected: filter == selected,
                })
                .collect(),
        }
    }

    /// The currently selected filter
    pub fn selected(&self) -> Filter {
        self.tabs
            .iter()
            .find(|tab| tab.selected)
            .map(|tab| tab.filter)
            .unwrap_or_default()
    }
}

/// One rendered snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub filter_bar: FilterBar,
    pub view: View,
}

impl Frame {
    /// Project the list under a filter into a full frame
    pub fn project(records: &[ExtensionRecord], filter: Filter, messages: &Messages) -> Self {
        Self {
            filter_bar: FilterBar::new(filter),
            view: View::project(records, filter, messages),
        }
    }

    /// Frame shown after a failed load
    pub fn load_failed(filter: Filter, messages: &Messages) -> Self {
        Self {
            filter_bar: FilterBar::new(filter),
            view: View::load_failed(messages),
        }
    }
}
