use colored::Colorize;
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use store_config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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
    pub color_enabled: bool,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            plain_mode: false,
            high_contrast_mode: false,
        }
    }
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color_enabled: config.ui_color_enabled,
            plain_mode: config.accessibility.plain_output,
            high_contrast_mode: config.accessibility.high_contrast,
        }
    }

    /// Colors only reach a terminal, and never when `NO_COLOR` is set.
    pub fn use_color(&self) -> bool {
        self.color_enabled
            && !self.plain_mode
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal()
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn apply_config(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Hint => ("HINT", ""),
        MessageKind::Section => ("", ""),
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            if icon.is_empty() || prefs.plain_mode {
                format!("{label}: {text}")
            } else {
                format!("{label}: {icon} {text}")
            }
        }
    };

    if !prefs.use_color() {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Hint => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
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
