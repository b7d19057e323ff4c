//! Interactive browse command
//!
//! Loads the list once, then reads one command per line and dispatches it
//! to the controller until `quit` or end of input. On a terminal lines are
//! read through a dialoguer prompt; otherwise stdin is read line by line
//! (removals then need `--yes`, since no confirmation can be asked).

use anyhow::Result;
use dialoguer::Input;
use extdeck_core::Messages;
use extdeck_extensions::command::CommandParseError;
use extdeck_extensions::{Command, Confirmer, ExtensionManager, Removal};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::common::{data_source, load_config, starting_theme, ProgressSource};
use crate::cli::{BrowseArgs, Cli};
use crate::confirm::TerminalConfirm;
use crate::output;
use crate::render::TerminalRenderer;

const HELP: &str = "\
Commands:
  all | active | inactive   Show all, only active or only inactive extensions
  filter <all|active|inactive>
  toggle <id>               Switch an extension on or off
  remove <id>               Remove an extension (asks first)
  show                      Draw the list again
  theme                     Switch between dark and light
  help                      Show this help
  quit                      Leave";

/// One line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellInput {
    Deck(Command),
    Show,
    Theme,
    Help,
    Quit,
    Blank,
}

impl FromStr for ShellInput {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(ShellInput::Blank),
            "show" | "ls" => Ok(ShellInput::Show),
            "theme" => Ok(ShellInput::Theme),
            "help" | "?" => Ok(ShellInput::Help),
            "quit" | "exit" | "q" => Ok(ShellInput::Quit),
            _ => s.parse().map(ShellInput::Deck),
        }
    }
}

/// Where input lines come from
enum LineSource {
    Prompt,
    Piped(Box<dyn BufRead>),
}

impl LineSource {
    /// Prompt when a person is at the terminal, otherwise read `reader`
    fn select(interactive: bool, reader: Box<dyn BufRead>) -> Self {
        if interactive {
            LineSource::Prompt
        } else {
            LineSource::Piped(reader)
        }
    }

    fn next_line(&mut self) -> Option<String> {
        match self {
            LineSource::Prompt => Input::<String>::new()
                .with_prompt("extdeck")
                .allow_empty(true)
                .interact_text()
                .ok(),
            LineSource::Piped(reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => None,
                    Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
                }
            }
        }
    }
}

/// Load and manage the list interactively
///
/// Supports:
/// - Default source: `extdeck` or `extdeck browse`
/// - Start filtered: `extdeck browse --filter active`
/// - No confirmation prompts: `extdeck browse --yes`
pub async fn run(args: BrowseArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let source = data_source(&config)?;
    let interactive = output::interactive();

    let mut manager = ExtensionManager::new(
        TerminalRenderer::stdout(starting_theme(&config)),
        TerminalConfirm::new(args.yes, interactive),
        Messages::new(config.locale),
    );

    if let Err(e) = manager
        .initialize(&ProgressSource::new(source.as_ref(), !cli.quiet))
        .await
    {
        output::error(&e.to_string());
    }

    if let Some(filter) = args.filter {
        manager.set_filter(filter);
    }

    output::info("Type 'help' for commands, 'quit' to leave");

    let mut lines = LineSource::select(interactive, Box::new(io::stdin().lock()));
    while let Some(line) = lines.next_line() {
        match line.parse::<ShellInput>() {
            Ok(input) => {
                if !apply(&mut manager, input) {
                    break;
                }
            }
            Err(e) => output::warning(&e.to_string()),
        }
    }

    Ok(())
}

/// Execute one input line; returns `false` when the session should end
fn apply<W: Write, C: Confirmer>(
    manager: &mut ExtensionManager<TerminalRenderer<W>, C>,
    input: ShellInput,
) -> bool {
    match input {
        ShellInput::Deck(Command::Remove(id)) => match manager.remove_extension(id) {
            Removal::Removed(ext) => output::removed(&ext.name),
            Removal::Declined => output::cancelled(),
            Removal::NotFound => {}
        },
        ShellInput::Deck(command) => manager.dispatch(command),
        ShellInput::Show => manager.render(),
        ShellInput::Theme => {
            manager.renderer_mut().toggle_theme();
            manager.render();
        }
        ShellInput::Help => println!("{}", HELP),
        ShellInput::Blank => {}
        ShellInput::Quit => return false,
    }
    true
}
