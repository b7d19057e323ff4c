//! Mock implementations for testing
//!
//! Provides test doubles for the controller's collaborators so commands can
//! be exercised without a terminal, a prompt or a network.

#![allow(dead_code)]

use async_trait::async_trait;
use extdeck_core::{LoadError, Messages, RawExtension};
use extdeck_extensions::{
    Confirmer, DataSource, ExtensionManager, Frame, Renderer, StaticDataSource,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Renderer that keeps every frame it receives
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn last(&self) -> &Frame {
        self.frames.last().expect("nothing was rendered")
    }

    pub fn count(&self) -> usize {
        self.frames.len()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

/// Confirmer answering from a script and recording the prompts it saw
pub struct ScriptedConfirmer {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .expect("unexpected confirmation prompt")
    }
}

/// Data source that always fails with the error produced by `make`
pub struct FailingSource {
    make: fn() -> LoadError,
}

impl FailingSource {
    pub fn new(make: fn() -> LoadError) -> Self {
        Self { make }
    }

    /// Simulates a 404 from the server
    pub fn not_found() -> Self {
        Self::new(|| LoadError::status("mock://data.json", 404))
    }
}

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError> {
        Err((self.make)())
    }

    fn describe(&self) -> String {
        "mock://data.json".to_string()
    }
}

pub type TestManager = ExtensionManager<RecordingRenderer, ScriptedConfirmer>;

/// Controller with a recording renderer and scripted confirmation answers
pub fn manager_with_answers(answers: &[bool]) -> TestManager {
    ExtensionManager::new(
        RecordingRenderer::default(),
        ScriptedConfirmer::new(answers),
        Messages::default(),
    )
}

/// Controller already initialized with `records`
pub async fn loaded_manager(records: Vec<RawExtension>, answers: &[bool]) -> TestManager {
    let mut manager = manager_with_answers(answers);
    manager
        .initialize(&StaticDataSource::new(records))
        .await
        .expect("static source cannot fail");
    manager
}
