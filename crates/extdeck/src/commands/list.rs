//! One-shot list command

use anyhow::{anyhow, Result};
use extdeck_core::Messages;
use extdeck_extensions::{AutoConfirm, ExtensionManager, Renderer};
use std::io;

use super::common::{data_source, load_config, starting_theme, ProgressSource};
use crate::cli::{Cli, ListArgs};
use crate::render::{JsonRenderer, LastFrame, TerminalRenderer};

/// Load the list, apply the filter and draw the result once
///
/// Supports:
/// - All extensions: `extdeck list`
/// - Filtered: `extdeck list --filter inactive`
/// - Another source: `extdeck list --source https://example.com/data.json`
/// - JSON output: `extdeck list --json`
///
/// A failed load still draws the error placeholder, then exits non-zero.
pub async fn run(args: ListArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let source = data_source(&config)?;

    let mut manager = ExtensionManager::new(
        LastFrame::default(),
        AutoConfirm::decline(),
        Messages::new(config.locale),
    );

    let loaded = manager
        .initialize(&ProgressSource::new(source.as_ref(), !cli.quiet))
        .await;
    manager.set_filter(args.filter);

    if let Some(frame) = manager.renderer_mut().take() {
        if args.json {
            JsonRenderer::new(io::stdout()).render(&frame);
        } else {
            TerminalRenderer::stdout(starting_theme(&config)).render(&frame);
        }
    }

    loaded
        .map(|_| ())
        .map_err(|e| anyhow!(e).context("Failed to load extensions"))
}
