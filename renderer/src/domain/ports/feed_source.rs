//! Feed source port trait
//!
//! Where the raw NDJSON body comes from.

use async_trait::async_trait;

use crate::error::FetchError;

/// Supplier of the complete feed body
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve the whole body as text. Called once per render pass.
    async fn fetch_text(&self) -> Result<String, FetchError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}
