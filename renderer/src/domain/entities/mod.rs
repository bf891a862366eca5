//! Domain entities
//!
//! A `Record` is one parsed feed line; a `TableRow` is its projection into
//! table cells.

pub mod record;
pub mod table_row;

pub use record::Record;
pub use table_row::{CellContent, TableCell, TableRow, COLUMN_LABELS};
