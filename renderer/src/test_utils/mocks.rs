//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::TableRow;
use crate::domain::ports::{FeedSource, TableBody};
use crate::error::FetchError;

// ============================================================================
// Mock Feed Source
// ============================================================================

pub struct MockFeedSource {
    body: Option<String>,
    calls: Arc<RwLock<usize>>,
}

impl MockFeedSource {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// A source whose fetch always fails, as if the network were down
    pub fn offline() -> Self {
        Self {
            body: None,
            calls: Arc::new(RwLock::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.read().unwrap()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        *self.calls.write().unwrap() += 1;

        self.body.clone().ok_or_else(|| FetchError::Io {
            location: self.describe(),
            source: std::io::Error::new(std::io::ErrorKind::NotConnected, "Mock offline"),
        })
    }

    fn describe(&self) -> String {
        "mock://feed".to_string()
    }
}

// ============================================================================
// Recording Table
// ============================================================================

/// Table body that keeps appended rows for inspection
#[derive(Default)]
pub struct RecordingTable {
    pub rows: Vec<TableRow>,
}

impl TableBody for RecordingTable {
    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}
