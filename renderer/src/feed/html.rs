//! HTML row rendering
//!
//! Turns table rows into `<tr>` markup.

use std::borrow::Cow;

use crate::domain::entities::{CellContent, TableCell, TableRow, COLUMN_LABELS};

/// How free-text fields are written into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Escape every field (default)
    #[default]
    Escape,
    /// Interpolate fields verbatim; markup in the feed is interpreted
    Raw,
}

impl Escaping {
    fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Escaping::Escape => escape_html(text),
            Escaping::Raw => Cow::Borrowed(text),
        }
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render a row as a single `<tr>` element
pub fn render_row(row: &TableRow, escaping: Escaping) -> String {
    let mut buf = String::from("<tr>");
    for cell in row.cells() {
        buf.push_str(&render_cell(cell, escaping));
    }
    buf.push_str("</tr>");
    buf
}

/// Render the header row of the events table
pub fn render_header_row() -> String {
    let mut buf = String::from("<tr>");
    for label in COLUMN_LABELS {
        buf.push_str(&format!("<th>{}</th>", label));
    }
    buf.push_str("<th></th></tr>");
    buf
}

fn render_cell(cell: &TableCell, escaping: Escaping) -> String {
    let open = match cell.label {
        Some(label) => format!("<td data-label=\"{}\">", label),
        None => "<td>".to_string(),
    };

    let content = match &cell.content {
        CellContent::Text(text) => escaping.apply(text).into_owned(),
        CellContent::Link {
            href,
            text,
            new_context,
        } => {
            let target = if *new_context {
                " target=\"_blank\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                escaping.apply(href),
                target,
                escape_html(text)
            )
        }
    };

    format!("{}{}</td>", open, content)
}
