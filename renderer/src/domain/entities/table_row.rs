//! Table row entity
//!
//! The projection of a record into the four cells of the events table.

use super::record::Record;

/// Visible text of the link cell
pub const LINK_TEXT: &str = "Acessar";

/// Labels of the three text columns, in display order
pub const COLUMN_LABELS: [&str; 3] = ["Título", "Data", "Local"];

/// Content of a single cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Link {
        href: String,
        text: &'static str,
        /// Open in a new browsing context (`target="_blank"`)
        new_context: bool,
    },
}

/// A table cell with its optional responsive label (`data-label`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub label: Option<&'static str>,
    pub content: CellContent,
}

impl TableCell {
    fn text(label: &'static str, text: String) -> Self {
        Self {
            label: Some(label),
            content: CellContent::Text(text),
        }
    }
}

/// One row of the events table: title, date, location, link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: [TableCell; 4],
}

impl TableRow {
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

impl From<Record> for TableRow {
    fn from(record: Record) -> Self {
        let [title_label, date_label, location_label] = COLUMN_LABELS;

        Self {
            cells: [
                TableCell::text(title_label, record.title.into_string()),
                TableCell::text(date_label, record.date_range.date_raw.into_string()),
                TableCell::text(location_label, record.location.location_raw.into_string()),
                TableCell {
                    label: None,
                    content: CellContent::Link {
                        href: record.url.into_string(),
                        text: LINK_TEXT,
                        new_context: true,
                    },
                },
            ],
        }
    }
}
