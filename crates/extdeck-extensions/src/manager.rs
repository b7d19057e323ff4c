//! Extension list controller
//!
//! Owns the authoritative in-memory list, the filter selection and the
//! lifecycle phase. Every mutating command re-projects the list and pushes
//! the resulting frame through the renderer. The controller is built once
//! and handed to whatever binds UI input to its commands.

use extdeck_core::{ExtensionRecord, Filter, LoadError, Messages};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::confirm::Confirmer;
use crate::render::Renderer;
use crate::source::DataSource;
use crate::view::Frame;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `initialize` has not completed
    Uninitialized,
    /// Loaded, or failed to load and showing the error placeholder
    Ready,
}

/// Outcome of a remove command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The user confirmed and the record is gone
    Removed(ExtensionRecord),
    /// The user declined; nothing changed
    Declined,
    /// Confirmed, but no record has that id
    NotFound,
}

/// The extension list controller
pub struct ExtensionManager<R, C> {
    extensions: Vec<ExtensionRecord>,
    filter: Filter,
    phase: Phase,
    load_failed: bool,
    messages: Messages,
    renderer: R,
    confirmer: C,
}

impl<R: Renderer, C: Confirmer> ExtensionManager<R, C> {
    /// Create an uninitialized controller
    pub fn new(renderer: R, confirmer: C, messages: Messages) -> Self {
        Self {
            extensions: Vec::new(),
            filter: Filter::default(),
            phase: Phase::Uninitialized,
            load_failed: false,
            messages,
            renderer,
            confirmer,
        }
    }

    /// Load the list from a data source and render it
    ///
    /// On failure the list stays empty, the error placeholder is rendered
    /// and the controller is still `Ready`; the error is returned so the
    /// caller can report it. Returns the number of loaded records.
    pub async fn initialize(&mut self, source: &dyn DataSource) -> Result<usize, LoadError> {
        if self.phase == Phase::Ready {
            warn!("Ignoring repeated initialization");
            return Err(LoadError::AlreadyInitialized);
        }

        let result = source.fetch().await;
        self.phase = Phase::Ready;
        self.filter = Filter::All;

        match result {
            Ok(raw) => {
                self.extensions = ExtensionRecord::assign_ids(raw);
                info!(
                    "Loaded {} extensions from {}",
                    self.extensions.len(),
                    source.describe()
                );
                self.render();
                Ok(self.extensions.len())
            }
            Err(e) => {
                warn!("Failed to load extensions: {}", e);
                self.load_failed = true;
                self.render();
                Err(e)
            }
        }
    }

    /// Change the filter selection and re-render
    pub fn set_filter(&mut self, filter: Filter) {
        if !self.ensure_ready("filter") {
            return;
        }
        debug!("Filter set to {}", filter);
        self.filter = filter;
        self.render();
    }

    /// Flip `is_active` for the record with `id`
    ///
    /// Returns `false` (and does nothing) when no record has that id.
    pub fn toggle_active(&mut self, id: usize) -> bool {
        if !self.ensure_ready("toggle") {
            return false;
        }

        let Some(extension) = self.extensions.iter_mut().find(|ext| ext.id == id) else {
            debug!("Toggle ignored: no extension with id {}", id);
            return false;
        };

        extension.is_active = !extension.is_active;
        debug!(
            "Extension {} ({}) is now {}",
            extension.id,
            extension.name,
            if extension.is_active { "active" } else { "inactive" }
        );
        self.render();
        true
    }

    /// Remove the record with `id` after the user confirms
    pub fn remove_extension(&mut self, id: usize) -> Removal {
        if !self.ensure_ready("remove") {
            return Removal::NotFound;
        }

        let name = self.get(id).map(|ext| ext.name.clone());
        let prompt = self.messages.confirm_remove(name.as_deref());
        if !self.confirmer.confirm(&prompt) {
            debug!("Removal of extension {} declined", id);
            return Removal::Declined;
        }

        let Some(index) = self.extensions.iter().position(|ext| ext.id == id) else {
            debug!("Remove ignored: no extension with id {}", id);
            return Removal::NotFound;
        };

        let removed = self.extensions.remove(index);
        info!("Removed extension {} ({})", removed.id, removed.name);
        self.render();
        Removal::Removed(removed)
    }

    /// Execute a command from the UI boundary
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetFilter(filter) => self.set_filter(filter),
            Command::Toggle(id) => {
                self.toggle_active(id);
            }
            Command::Remove(id) => {
                self.remove_extension(id);
            }
        }
    }

    /// Project the current state and push it to the renderer
    pub fn render(&mut self) {
        let frame = self.frame();
        self.renderer.render(&frame);
    }

    /// Projection of the current state
    pub fn frame(&self) -> Frame {
        if self.load_failed {
            Frame::load_failed(self.filter, &self.messages)
        } else {
            Frame::project(&self.extensions, self.filter, &self.messages)
        }
    }

    /// The full list in order
    pub fn extensions(&self) -> &[ExtensionRecord] {
        &self.extensions
    }

    /// Look up a record by id
    pub fn get(&self, id: usize) -> Option<&ExtensionRecord> {
        self.extensions.iter().find(|ext| ext.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether initialization ended on the error path
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    fn ensure_ready(&self, command: &str) -> bool {
        if self.phase == Phase::Uninitialized {
            warn!("Ignoring '{}' before the extension list is loaded", command);
            return false;
        }
        true
    }
}
