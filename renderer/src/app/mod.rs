//! Application layer
//!
//! The render pass orchestration.

pub mod feed_renderer;

pub use feed_renderer::{failure_message, ErrorPolicy, FeedRenderer};
