use crate::cli::ui::style::UiStyle;
use crate::view::DetailView;

/// Renders label/value pairs aligned on the longest label.
pub struct DetailViewRenderer;

impl DetailViewRenderer {
    pub fn render(view: &DetailView, style: &UiStyle) {
        for line in Self::lines(view, style) {
            println!("{line}");
        }
    }

    pub fn lines(view: &DetailView, style: &UiStyle) -> Vec<String> {
        let width = view
            .fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0);
        let mut lines = vec![
            style.heading(&view.title),
            style.horizontal_line(view.title.chars().count()),
        ];
        lines.extend(
            view.fields
                .iter()
                .map(|field| format!("{:width$} : {}", field.label, field.value)),
        );
        lines
    }
}
