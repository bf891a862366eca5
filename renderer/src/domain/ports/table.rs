//! Table container port trait

use crate::domain::entities::TableRow;

/// The body of the events table.
///
/// The renderer only ever appends; it never reads back or clears rows.
pub trait TableBody {
    fn append_row(&mut self, row: TableRow);
}
