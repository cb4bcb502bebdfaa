/// Status output for the CLI
///
/// Standard output carries JSON only, so everything here goes to stderr.
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const PREFIX: &str = "[proChariot]";

/// Plain status line, e.g. `[proChariot] Starting analysis on: DIR`
pub fn status(message: &str) {
    eprintln!("{} {}", PREFIX.cyan(), message);
}

/// Display a success message
pub fn success(message: &str) {
    eprintln!("{} {} {}", PREFIX.cyan(), "✓".green(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    eprintln!("{} {} {}", PREFIX.cyan(), "⚠".yellow(), message);
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{} {} {}", PREFIX.cyan(), "Error:".red().bold(), message);
}

/// Tree structure item
pub fn tree_item(is_last: bool, label: &str, value: &str) {
    let prefix = if is_last { "└─" } else { "├─" };
    eprintln!("{} {}: {}", prefix.dimmed(), label, value);
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
