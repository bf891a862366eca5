//! HTML document
//!
//! In-memory page holding the events table. Rows are rendered to markup as
//! they are appended.

use chrono::{DateTime, Utc};

use crate::domain::entities::TableRow;
use crate::domain::ports::TableBody;
use crate::feed::{escape_html, render_header_row, render_row, Escaping};

/// Page containing the `#<table_id>` events table
pub struct HtmlDocument {
    table_id: String,
    escaping: Escaping,
    rows: Vec<String>,
}

impl HtmlDocument {
    pub fn new(table_id: impl Into<String>, escaping: Escaping) -> Self {
        Self {
            table_id: table_id.into(),
            escaping,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rendered `<tr>` elements of the table body, in append order
    #[cfg(test)]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Render the table element alone
    pub fn render_table(&self) -> String {
        let mut buf = String::new();

        buf.push_str(&format!("<table id=\"{}\">\n", escape_html(&self.table_id)));
        buf.push_str("<thead>\n");
        buf.push_str(&render_header_row());
        buf.push_str("\n</thead>\n");
        buf.push_str("<tbody>\n");
        for row in &self.rows {
            buf.push_str(row);
            buf.push('\n');
        }
        buf.push_str("</tbody>\n");
        buf.push_str("</table>\n");

        buf
    }

    /// Render the complete page
    pub fn render_page(&self, generated_at: DateTime<Utc>) -> String {
        let mut buf = String::new();

        buf.push_str("<!DOCTYPE html>\n");
        buf.push_str("<html lang=\"pt-BR\">\n");
        buf.push_str("<head>\n");
        buf.push_str("<meta charset=\"utf-8\">\n");
        buf.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        buf.push_str(&format!(
            "<meta name=\"generator\" content=\"xcmagg-table {}\">\n",
            env!("CARGO_PKG_VERSION")
        ));
        buf.push_str("<title>xcmagg</title>\n");
        buf.push_str("</head>\n");
        buf.push_str("<body>\n");
        buf.push_str(&self.render_table());
        buf.push_str(&format!(
            "<footer>Gerado em {}</footer>\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        buf.push_str("</body>\n");
        buf.push_str("</html>\n");

        buf
    }
}

impl TableBody for HtmlDocument {
    fn append_row(&mut self, row: TableRow) {
        self.rows.push(render_row(&row, self.escaping));
    }
}
