//! Feed module
//!
//! NDJSON parsing and HTML row rendering.

pub mod html;
pub mod ndjson;

pub use html::{escape_html, render_header_row, render_row, Escaping};
pub use ndjson::{parse_line, split_lines};
