//! Error types for the feed table renderer
//!
//! This module defines error types for each stage of a render pass:
//! - `FetchError`: Retrieving the feed body (network or local file)
//! - `LineError`: A single NDJSON line that could not become a record
//! - `ConfigError`: Invalid environment configuration
//! - `FeedError`: Terminal failure of a run (configuration, fetch, or parse)

use std::fmt;

use serde_json::error::Category;
use thiserror::Error;

/// Feed retrieval errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a feed line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineErrorKind {
    /// Not valid JSON at all (syntax error or truncated document)
    Malformed,
    /// Valid JSON, but not shaped like a record
    Shape,
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineErrorKind::Malformed => write!(f, "malformed JSON"),
            LineErrorKind::Shape => write!(f, "unexpected record shape"),
        }
    }
}

/// A feed line that could not be turned into a record
#[derive(Debug, Clone, Error)]
#[error("Line {line}: {kind}: {message}")]
pub struct LineError {
    /// 1-based line number in the fetched body
    pub line: usize,
    pub kind: LineErrorKind,
    pub message: String,
}

impl LineError {
    pub fn shape(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            kind: LineErrorKind::Shape,
            message: message.into(),
        }
    }

    /// Classify a serde_json failure for the given line
    pub fn from_json(line: usize, err: &serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => LineErrorKind::Shape,
            Category::Syntax | Category::Eof | Category::Io => LineErrorKind::Malformed,
        };

        Self {
            line,
            kind,
            message: err.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Terminal errors of a run, reported through one diagnostic line
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse failed: {0}")]
    Line(#[from] LineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
