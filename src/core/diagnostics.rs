// src/core/diagnostics.rs
//! Coloured output-panel helpers shared by the subcommands and the shell.

use std::fmt::Display;

use colored::Colorize;

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".bright_red().bold(), message.bright_white());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warn:".yellow().bold(), message);
}

/// Inline warning for report text (the collision notice).
pub fn warning_line(message: &str) -> String {
    format!("{} {}", "warn:".yellow().bold(), message)
}

pub fn heading(title: &str) -> String {
    title.bold().truecolor(0, 255, 180).to_string()
}

/// `Label: value`
pub fn field(label: &str, value: impl Display) -> String {
    format!("{} {}", format!("{}:", label).dimmed(), value)
}
