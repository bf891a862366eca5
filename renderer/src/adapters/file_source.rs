//! Local file feed source
//!
//! Reads a local NDJSON file from disk instead of the network. The file must
//! carry the same per-line shape the proxy serves (`date_range.date_raw`,
//! `location.location_raw`); flat `{title,url,date,city,uf}` exports are not
//! records and fail as shape errors.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::FeedSource;
use crate::error::FetchError;

pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                location: self.describe(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
