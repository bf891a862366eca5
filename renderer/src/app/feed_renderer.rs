//! Feed renderer
//!
//! Runs one render pass: fetch the feed, parse each line, and append one
//! table row per record in source order.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::TableRow;
use crate::domain::ports::{FeedSource, TableBody};
use crate::error::{FeedError, LineError};
use crate::feed::{parse_line, split_lines};

/// What to do when a feed line cannot be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first bad line; rows already appended stay in place
    #[default]
    Abort,
    /// Log the bad line and keep rendering the rest
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            _ => Err(format!("Unknown error policy: {}", s)),
        }
    }
}

/// Outcome of a render pass that ran to the end of the feed
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Rows appended to the table
    pub rendered: usize,
    /// Lines skipped under `ErrorPolicy::Skip`
    pub failures: Vec<LineError>,
}

/// Fetches the feed and renders it into a table body
pub struct FeedRenderer<F: FeedSource + ?Sized> {
    source: Arc<F>,
    policy: ErrorPolicy,
}

impl<F: FeedSource + ?Sized> FeedRenderer<F> {
    pub fn new(source: Arc<F>, policy: ErrorPolicy) -> Self {
        Self { source, policy }
    }

    /// Run one pass: a single fetch, then every line in order.
    ///
    /// A fetch failure appends nothing. Under `ErrorPolicy::Abort` the first
    /// bad line ends the pass with an error, leaving earlier rows appended.
    pub async fn render_into<T: TableBody>(
        &self,
        table: &mut T,
    ) -> Result<RenderReport, FeedError> {
        tracing::debug!(source = %self.source.describe(), "Fetching feed");
        let body = self.source.fetch_text().await?;
        tracing::debug!(bytes = body.len(), "Feed body received");

        render_body(&body, table, self.policy)
    }
}

/// Render an already fetched body into the table
pub fn render_body<T: TableBody>(
    body: &str,
    table: &mut T,
    policy: ErrorPolicy,
) -> Result<RenderReport, FeedError> {
    let mut report = RenderReport::default();

    for line in split_lines(body) {
        match parse_line(&line) {
            Ok(record) => {
                table.append_row(TableRow::from(record));
                report.rendered += 1;
            }
            Err(err) => match policy {
                ErrorPolicy::Abort => {
                    tracing::debug!(rendered = report.rendered, "Aborting render pass");
                    return Err(err.into());
                }
                ErrorPolicy::Skip => {
                    tracing::warn!(line = err.line, kind = %err.kind, "Skipping feed line: {}", err.message);
                    report.failures.push(err);
                }
            },
        }
    }

    Ok(report)
}

/// Diagnostic line written when a run fails
pub fn failure_message(err: &FeedError) -> String {
    format!("Erro: {}", err)
}
