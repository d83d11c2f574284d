//! CLI command modules and shared output helpers.

pub mod ask;
pub mod chat;
pub mod config;

use console::style;
use glance_core::Explanation;
use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner shown while network calls are in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Render an explanation for human eyes: the answer first, then the caption
/// the answer was grounded in (omitted entirely when no caption exists).
pub(crate) fn print_explanation(explanation: &Explanation) {
    if !explanation.image_name.is_empty() {
        println!("{}", style(&explanation.image_name).bold().underlined());
    }
    println!("{}", explanation.answer);

    if !explanation.description.is_empty() {
        println!();
        println!("{}", style("Image description").dim().italic());
        println!("{}", style(&explanation.description).dim());
    }
}
