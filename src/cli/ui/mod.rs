pub mod detail;
pub mod menu;
pub mod style;
pub mod table;

pub use detail::DetailViewRenderer;
pub use menu::MenuRenderer;
pub use style::UiStyle;
pub use table::TableRenderer;

use crate::view::View;

/// Prints whichever view an action produced.
pub fn render_view(view: &View, style: &UiStyle) {
    match view {
        View::Table(table) => TableRenderer::render(table, style),
        View::Detail(detail) => DetailViewRenderer::render(detail, style),
        View::Menu { title, entries } => MenuRenderer::render(title, entries, style),
    }
}
