use colored::{Color, Colorize};

use crate::cli::output::{current_preferences, OutputPreferences};

#[derive(Clone, Debug)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub plain_mode: bool,
    pub high_contrast: bool,
}

impl UiStyle {
    pub fn detect() -> Self {
        Self::from_preferences(&current_preferences())
    }

    pub fn from_preferences(prefs: &OutputPreferences) -> Self {
        let use_color = prefs.use_color();
        let plain_mode = prefs.plain_mode;
        Self {
            header_prefix: if plain_mode { String::new() } else { "> ".into() },
            horizontal: if plain_mode { '-' } else { '─' },
            use_color,
            color_header: if use_color && !prefs.high_contrast_mode {
                Some(Color::BrightBlue)
            } else {
                None
            },
            plain_mode,
            high_contrast: prefs.high_contrast_mode,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(20))
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match self.color_header {
            Some(color) => text.color(color).bold().to_string(),
            None => text.bold().to_string(),
        }
    }

    pub fn heading(&self, title: &str) -> String {
        self.apply_header_style(&format!("{}{}", self.header_prefix, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_ascii_rules() {
        let style = UiStyle::from_preferences(&OutputPreferences {
            color_enabled: true,
            plain_mode: true,
            high_contrast_mode: false,
        });
        assert!(!style.use_color);
        assert_eq!(style.heading("Sales"), "Sales");
        assert_eq!(style.horizontal_line(3), "-".repeat(20));
    }
}
