use crate::cli::ui::style::UiStyle;

/// Renders simple bullet-style menus.
pub struct MenuRenderer;

impl MenuRenderer {
    pub fn render(title: &str, entries: &[(String, String)], style: &UiStyle) {
        println!("{}", style.heading(title));
        if !style.plain_mode {
            println!("{}", style.horizontal_line(title.chars().count()));
        }
        let marker = if style.plain_mode { "*" } else { "•" };
        for (label, description) in entries {
            println!("  {marker} {label:<16} {description}");
        }
    }
}
