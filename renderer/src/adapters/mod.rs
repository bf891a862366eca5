//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file_source;
pub mod html_document;
pub mod http;

pub use file_source::FileFeedSource;
pub use html_document::HtmlDocument;
pub use http::ProxyFeedClient;
