//! Terminal and JSON renderers for extension frames

use console::Style;
use extdeck_core::{Filter, Theme};
use extdeck_extensions::{Card, FilterBar, Frame, Renderer, View};
use std::io::{self, Write};
use tabled::{
    settings::{object::Columns, Modify, Style as TableStyle, Width},
    Table, Tabled,
};
use tracing::warn;
use url::Url;

/// Whether a card's own logo can be shown
///
/// Blank logos and URLs with schemes we cannot fetch fall back to the
/// generated placeholder. Relative paths are taken as resolvable.
pub fn logo_resolves(logo: &str) -> bool {
    let logo = logo.trim();
    if logo.is_empty() {
        return false;
    }
    match Url::parse(logo) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "file" | "data"),
        Err(_) => true,
    }
}

/// Logo reference to display for a card
pub fn display_logo(card: &Card) -> &str {
    if logo_resolves(&card.logo) {
        &card.logo
    } else {
        &card.fallback_logo
    }
}

/// Row for one card
#[derive(Tabled)]
struct CardRow {
    id: usize,
    status: String,
    name: String,
    description: String,
    logo: String,
}

impl From<&Card> for CardRow {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            status: if card.is_active {
                "● active".to_string()
            } else {
                "○ inactive".to_string()
            },
            name: card.name.clone(),
            description: card.description.clone(),
            logo: display_logo(card).to_string(),
        }
    }
}

fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Inactive => "Inactive",
    }
}

/// Draws frames as a filter bar plus a card table
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(theme: Theme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between dark and light; returns the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn title_style(&self) -> Style {
        match self.theme {
            Theme::Dark => Style::new().cyan().bold(),
            Theme::Light => Style::new().blue().bold(),
        }
    }

    fn selected_style(&self) -> Style {
        match self.theme {
            Theme::Dark => Style::new().black().on_cyan().bold(),
            Theme::Light => Style::new().white().on_blue().bold(),
        }
    }

    fn filter_bar(&self, bar: &FilterBar) -> String {
        let selected = self.selected_style();
        bar.tabs
            .iter()
            .map(|tab| {
                let label = filter_label(tab.filter);
                if tab.selected {
                    selected.apply_to(format!("[ {} ]", label)).to_string()
                } else {
                    format!("  {}  ", label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.title_style().apply_to("Extensions List")
        )?;
        writeln!(self.out, "{}", self.filter_bar(&frame.filter_bar))?;
        writeln!(self.out)?;

        match &frame.view {
            View::Cards { cards } => {
                let rows: Vec<CardRow> = cards.iter().map(CardRow::from).collect();
                let mut table = Table::new(rows);
                table.with(TableStyle::sharp());
                table.with(Modify::new(Columns::new(3..4)).with(Width::wrap(50).keep_words(true))); // description
                writeln!(self.out, "{}", table)?;
            }
            View::Empty { message, .. } => {
                writeln!(self.out, "  {}", Style::new().dim().apply_to(message))?;
            }
            View::LoadFailed { message, .. } => {
                writeln!(self.out, "  {}", Style::new().red().bold().apply_to(message))?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) {
        if let Err(e) = self.write_frame(frame) {
            warn!("Failed to draw extension list: {}", e);
        }
    }
}

/// Writes each frame as pretty-printed JSON
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame) {
        let result = serde_json::to_string_pretty(frame)
            .map_err(io::Error::other)
            .and_then(|json| writeln!(self.out, "{}", json));
        if let Err(e) = result {
            warn!("Failed to write frame as JSON: {}", e);
        }
    }
}

/// Keeps only the most recent frame, for one-shot output
#[derive(Debug, Default)]
pub struct LastFrame(Option<Frame>);

impl LastFrame {
    pub fn take(&mut self) -> Option<Frame> {
        self.0.take()
    }
}

impl Renderer for LastFrame {
    fn render(&mut self, frame: &Frame) {
        self.0 = Some(frame.clone());
    }
}
