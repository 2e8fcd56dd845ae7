//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::Stylize;

use super::quiet;

/// Yellow warning on stderr, suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red error on stderr, always shown
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back to the terminal silently.
pub fn clipboard_fallback_prompt() -> bool {
    if !quiet::can_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

pub fn numbers_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} number(s) \u{2192} {path}");
    }
}
