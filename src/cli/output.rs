use colored::{ColoredString, Colorize};
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::theme::{Rgb, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color: bool,
    pub theme: &'static Theme,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color: true,
            theme: Theme::by_index(0),
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

fn lock() -> &'static RwLock<OutputPreferences> {
    PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()))
}

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = lock().write() {
        *guard = prefs;
    }
}

pub fn set_theme(theme: &'static Theme) {
    if let Ok(mut guard) = lock().write() {
        guard.theme = theme;
    }
}

fn preferences() -> OutputPreferences {
    lock().read().map(|guard| *guard).unwrap_or_default()
}

fn paint(text: &str, rgb: Rgb) -> ColoredString {
    text.truecolor(rgb.0, rgb.1, rgb.2)
}

/// Colours `text` with a theme colour when colour output is enabled.
pub fn tint(text: impl fmt::Display, pick: fn(&Theme) -> Rgb) -> String {
    let prefs = preferences();
    let text = text.to_string();
    if prefs.color {
        paint(&text, pick(prefs.theme)).to_string()
    } else {
        text
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Hint => format!("  {text}"),
        MessageKind::Warning => format!("[!] {text}"),
        MessageKind::Error => format!("[x] {text}"),
        MessageKind::Info | MessageKind::Success => text,
    };

    if !prefs.color {
        return base;
    }

    let theme = prefs.theme;
    match kind {
        MessageKind::Success => paint(&base, theme.accent).to_string(),
        MessageKind::Warning => paint(&base, theme.warning).to_string(),
        MessageKind::Error => paint(&base, theme.danger).bold().to_string(),
        MessageKind::Hint => paint(&base, theme.text_secondary).to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_has_no_escape_codes() {
        let prefs = OutputPreferences {
            color: false,
            theme: Theme::by_index(0),
        };
        assert_eq!(apply_style(MessageKind::Warning, "careful", &prefs), "[!] careful");
        assert_eq!(apply_style(MessageKind::Section, " History ", &prefs), "=== History ===");
        assert_eq!(apply_style(MessageKind::Info, "plain", &prefs), "plain");
    }
}
