//! xcmagg event table
//!
//! Fetches the aggregated events feed (newline-delimited JSON) and renders
//! each record as a row of an HTML table. One fetch, one pass, one page.

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adapters::{FileFeedSource, HtmlDocument, ProxyFeedClient};
use app::{failure_message, FeedRenderer};
use config::Config;
use domain::ports::FeedSource;
use error::FeedError;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout may carry the page
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,xcmagg_table=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting xcmagg table renderer...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return Ok(report_failure(&FeedError::from(e))),
    };
    tracing::debug!(
        policy = %config.error_policy,
        escaping = ?config.escaping,
        "Configuration loaded"
    );

    let source: Arc<dyn FeedSource> = match &config.feed_file {
        Some(path) => Arc::new(FileFeedSource::new(path)),
        None => {
            match ProxyFeedClient::new(&config.proxy_url, &config.source_url, config.timeout) {
                Ok(client) => Arc::new(client),
                Err(e) => return Ok(report_failure(&FeedError::from(e))),
            }
        }
    };
    tracing::info!("Reading feed from {}", source.describe());

    let renderer = FeedRenderer::new(source, config.error_policy);
    let mut document = HtmlDocument::new(&config.table_id, config.escaping);

    let outcome = renderer.render_into(&mut document).await;
    let succeeded = match outcome {
        Ok(report) => {
            tracing::info!(
                rows = document.row_count(),
                rendered = report.rendered,
                skipped = report.failures.len(),
                "Render pass complete"
            );
            true
        }
        Err(e) => {
            report_failure(&e);
            false
        }
    };

    // The page is written even after a failure: empty or truncated table
    let page = document.render_page(Utc::now());
    write_output(config.output.as_deref(), &page).await?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Terminal handler: one `Erro:` diagnostic line, failure exit code
fn report_failure(err: &FeedError) -> ExitCode {
    tracing::error!("{}", failure_message(err));
    ExitCode::FAILURE
}

async fn write_output(path: Option<&Path>, page: &str) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, page)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(page.as_bytes())
                .await
                .context("Failed to write page to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
