use crate::cli::ui::style::UiStyle;
use crate::view::Table;

/// Renders [`Table`] instances using simple padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table, style: &UiStyle) {
        for line in Self::lines(table, style) {
            println!("{line}");
        }
    }

    pub fn lines(table: &Table, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &table.title {
            lines.push(style.heading(title));
        }

        let total_width = table
            .columns
            .iter()
            .map(|col| col.width + 1)
            .sum::<usize>()
            .max(1);

        if table.rows.is_empty() {
            if let Some(message) = &table.empty_message {
                lines.push(message.clone());
            }
        } else {
            let header = table
                .columns
                .iter()
                .map(|col| format!("{:width$} ", col.header, width = col.width))
                .collect::<String>();
            lines.push(style.horizontal_line(total_width));
            lines.push(style.apply_header_style(header.trim_end()));
            lines.push(style.horizontal_line(total_width));

            for row in &table.rows {
                let line = table
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| {
                        let cell = row.cells.get(idx).map(String::as_str).unwrap_or("");
                        format!("{:width$}", cell, width = column.width)
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(line.trim_end().to_string());
            }
        }

        for footer in &table.footer {
            lines.push(footer.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputPreferences;
    use crate::view::TableColumn;

    fn plain_style() -> UiStyle {
        UiStyle::from_preferences(&OutputPreferences {
            color_enabled: false,
            plain_mode: true,
            high_contrast_mode: false,
        })
    }

    #[test]
    fn pads_cells_to_column_width() {
        let mut table = Table::new(
            Some("Warehouse"),
            vec![TableColumn::new("ID", 4), TableColumn::new("Name", 6)],
        );
        table.add_row(vec!["1", "Chair"]);
        let lines = TableRenderer::lines(&table, &plain_style());
        assert_eq!(lines[0], "Warehouse");
        assert_eq!(lines[2], "ID   Name");
        assert_eq!(lines[4], "1    Chair");
    }

    #[test]
    fn empty_tables_show_their_message() {
        let table = Table::new(Some("Sales"), vec![TableColumn::new("ID", 4)])
            .with_empty_message("No sales recorded");
        let lines = TableRenderer::lines(&table, &plain_style());
        assert_eq!(lines, vec!["Sales".to_string(), "No sales recorded".to_string()]);
    }
}
