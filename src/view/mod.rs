//! Declarative view models produced by managers and consumed by renderers.
//!
//! Nothing here touches the terminal; `cli::ui` decides how a [`View`] looks.

mod lookup;

pub use lookup::NameLookup;

/// Declarative description of a table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Row data for a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Read-only collection overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    /// Shown in place of rows when the table is empty.
    pub empty_message: Option<String>,
    /// Free-form lines printed under the rows.
    pub footer: Vec<String>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
            empty_message: None,
            footer: Vec::new(),
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        let row = TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
        };
        self.rows.push(row);
    }

    pub fn add_footer(&mut self, line: impl Into<String>) {
        self.footer.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell under `header` in row `index`, if both exist.
    pub fn cell(&self, index: usize, header: &str) -> Option<&str> {
        let column = self
            .columns
            .iter()
            .position(|column| column.header == header)?;
        self.rows
            .get(index)
            .and_then(|row| row.cells.get(column))
            .map(String::as_str)
    }
}

/// Labelled field in a [`DetailView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

impl DetailField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Single-record or summary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub fields: Vec<DetailField>,
}

impl DetailView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(DetailField::new(label, value));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// Content that replaces the visible region after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Table(Table),
    Detail(DetailView),
    /// A menu of sections with one-line descriptions.
    Menu {
        title: String,
        entries: Vec<(String, String)>,
    },
}

impl View {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            View::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_detail(&self) -> Option<&DetailView> {
        match self {
            View::Detail(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<Table> for View {
    fn from(table: Table) -> Self {
        View::Table(table)
    }
}

impl From<DetailView> for View {
    fn from(detail: DetailView) -> Self {
        View::Detail(detail)
    }
}
