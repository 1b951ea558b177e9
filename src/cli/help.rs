use crate::cli::commands::{Command, COMMANDS};
use crate::cli::ui::{DetailViewRenderer, MenuRenderer, UiStyle};
use crate::view::DetailView;

pub fn print_overview(style: &UiStyle) {
    let entries: Vec<(String, String)> = COMMANDS
        .iter()
        .map(|command| (command.name.to_string(), command.description.to_string()))
        .collect();
    MenuRenderer::render("Available commands", &entries, style);
    println!("Use `help <command>` for details.");
}

pub fn print_command(command: &Command, style: &UiStyle) {
    let mut view = DetailView::new(format!("Help: {}", command.name))
        .field("description", command.description)
        .field("usage", command.usage);
    if !command.actions.is_empty() {
        view = view.field("actions", command.actions.join(", "));
    }
    DetailViewRenderer::render(&view, style);
}
