//! Domain ports (traits)
//!
//! Port traits define what the renderer needs from the outside world.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod table;

pub use feed_source::FeedSource;
pub use table::TableBody;
