//! Domain layer
//!
//! Feed records, table rows, and the port traits the renderer depends on.

pub mod entities;
pub mod ports;
