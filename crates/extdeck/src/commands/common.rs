//! Shared helpers for commands that load the extension list

use anyhow::{Context, Result};
use async_trait::async_trait;
use extdeck_core::{ConfigLoader, DeckConfig, LoadError, RawExtension, Theme};
use extdeck_extensions::{DataSource, DataSourceLocation};
use std::time::Duration;
use tracing::debug;

use crate::cli::Cli;
use crate::output;

/// Resolve configuration: defaults, config file, environment, then flags
pub(super) fn load_config(cli: &Cli) -> Result<DeckConfig> {
    let loader = ConfigLoader::new().context("Failed to locate config directory")?;
    let mut config = loader
        .load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }

    // Only ever switch colors off; console decides from the terminal otherwise
    if !config.display.color_enabled {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    debug!(
        "Using source {} (locale {}, theme {:?})",
        config.source, config.locale, config.theme
    );
    Ok(config)
}

/// Build the data source named by the configuration
pub(super) fn data_source(config: &DeckConfig) -> Result<Box<dyn DataSource>> {
    let timeout = Duration::from_secs(config.network.http_timeout_secs);
    DataSourceLocation::parse(&config.source)
        .into_source(timeout)
        .context("Failed to initialize data source")
}

/// Starting theme, honoring the terminal's COLORFGBG hint for `auto`
pub(super) fn starting_theme(config: &DeckConfig) -> Theme {
    let hint = std::env::var("COLORFGBG").ok();
    config.theme.resolve(hint.as_deref())
}

/// Shows a spinner while the wrapped source is fetched
pub(super) struct ProgressSource<'a> {
    inner: &'a dyn DataSource,
    show: bool,
}

impl<'a> ProgressSource<'a> {
    pub(super) fn new(inner: &'a dyn DataSource, show: bool) -> Self {
        Self { inner, show }
    }
}

#[async_trait]
impl DataSource for ProgressSource<'_> {
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError> {
        if !self.show {
            return self.inner.fetch().await;
        }

        let pb = output::spinner(&format!("Loading extensions from {}", self.inner.describe()));
        let result = self.inner.fetch().await;
        pb.finish_and_clear();
        result
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}
