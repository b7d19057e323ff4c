//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use extdeck_core::Filter;

/// extdeck - browse, filter, toggle and remove extensions
#[derive(Parser, Debug)]
#[command(name = "extdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: ~/.extdeck/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Data source: an http(s) URL or a path to a JSON file
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Command to run (default: browse)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load the list and manage it interactively
    Browse(BrowseArgs),

    /// Load the list, render it once and exit
    List(ListArgs),

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Browse(BrowseArgs::default())
    }
}

// Browse command
#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    /// Skip removal confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Filter to start with after loading
    #[arg(short, long)]
    pub filter: Option<Filter>,
}

// List command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Which extensions to show: all, active or inactive
    #[arg(short, long, default_value = "all")]
    pub filter: Filter,

    /// Output the rendered frame as JSON
    #[arg(long)]
    pub json: bool,
}

// Version command
#[derive(Args, Debug, Clone)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
