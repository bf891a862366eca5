//! HTTP feed client
//!
//! Fetches the NDJSON feed through a CORS proxy that takes the target URL
//! as a query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::FeedSource;
use crate::error::FetchError;

/// Feed source backed by a single HTTP GET
#[derive(Clone)]
pub struct ProxyFeedClient {
    http: Client,
    request_url: String,
}

impl ProxyFeedClient {
    /// Create a client for `source_url` fetched through `proxy_url`.
    ///
    /// An empty `proxy_url` fetches the source directly.
    pub fn new(
        proxy_url: &str,
        source_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder =
            Client::builder().user_agent(concat!("xcmagg-table/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            request_url: proxied_url(proxy_url, source_url),
        })
    }

    #[cfg(test)]
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}

/// Build the request URL: the proxy prefix followed by the encoded target
pub fn proxied_url(proxy_url: &str, source_url: &str) -> String {
    if proxy_url.is_empty() {
        return source_url.to_string();
    }
    format!("{}{}", proxy_url, encode(source_url))
}

#[async_trait]
impl FeedSource for ProxyFeedClient {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        let response = self.http.get(&self.request_url).send().await?;

        handle_text_response(response).await
    }

    fn describe(&self) -> String {
        self.request_url.clone()
    }
}

async fn handle_text_response(response: reqwest::Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PROXY_URL, DEFAULT_SOURCE_URL};
    use crate::test_utils::numbered_lines;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_proxied_url_encodes_target() {
        assert_eq!(
            proxied_url(DEFAULT_PROXY_URL, DEFAULT_SOURCE_URL),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fxcmagg.lvido.tech%2Fdata.jsonl"
        );
    }

    #[test]
    fn test_empty_proxy_fetches_directly() {
        let client = ProxyFeedClient::new("", "http://localhost/data.jsonl", None).unwrap();

        assert_eq!(client.request_url(), "http://localhost/data.jsonl");
        assert_eq!(client.describe(), "http://localhost/data.jsonl");
    }

    #[tokio::test]
    async fn test_fetch_through_proxy() {
        let server = MockServer::start().await;
        let body = numbered_lines(2).join("\n");
        Mock::given(method("GET"))
            .and(path("/raw"))
            .and(query_param("url", DEFAULT_SOURCE_URL))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let proxy = format!("{}/raw?url=", server.uri());
        let client = ProxyFeedClient::new(&proxy, DEFAULT_SOURCE_URL, None).unwrap();

        assert_eq!(client.fetch_text().await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let url = format!("{}/data.jsonl", server.uri());
        let client = ProxyFeedClient::new("", &url, Some(Duration::from_secs(5))).unwrap();

        match client.fetch_text().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/data.jsonl", port);

        let client = ProxyFeedClient::new("", &url, Some(Duration::from_secs(5))).unwrap();

        assert!(matches!(
            client.fetch_text().await,
            Err(FetchError::Request(_))
        ));
    }
}
