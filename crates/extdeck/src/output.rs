//! Status lines printed around the extension table
//!
//! Results go to stdout next to the table; problems go to stderr so
//! `list --json` output stays parseable.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Report that an extension was removed
pub fn removed(name: &str) {
    success(&format!("Removed {}", style(name).bold()));
}

/// Report that a removal was declined at the prompt
pub fn cancelled() {
    println!("  {}", style("Cancelled, nothing removed").dim());
}

/// Whether someone can answer prompts
///
/// Prompts read keys from stdin and draw on stderr, so both must be a
/// terminal. Where stdout goes does not matter.
pub fn interactive() -> bool {
    io::stdin().is_terminal() && console::Term::stderr().is_term()
}

/// Spinner on stderr while the data source is fetched
///
/// Hidden when nobody is watching the terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    if !console::user_attended_stderr() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
