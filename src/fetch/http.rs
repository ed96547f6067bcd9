//! HTTP fetch executor
//!
//! This module owns everything the crawl core delegates about transport:
//! - Building the reqwest client with the configured user agent
//! - A politeness delay before every request
//! - Retry with a fixed delay for transient failures (5xx, timeouts)
//! - Content-Type checking
//!
//! Robots compliance is intentionally not implemented here; a compliant
//! executor can be slotted in behind the same [`Fetcher`] trait.

use crate::config::CrawlerConfig;
use crate::fetch::{CrawlRequest, CrawlResponse, Fetcher, FetchFailure};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with the given user agent and timeout
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed fetch executor
///
/// # Request Flow
///
/// 1. Sleep for the configured download delay
/// 2. GET the URL
/// 3. Non-2xx status → `Http` failure (5xx retried)
/// 4. Non-HTML Content-Type → `ContentMismatch`, no retry
/// 5. Read the body → response, with carried metadata passed through
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 4xx | Immediate failure |
/// | HTTP 5xx | Retry up to `max-retries`, fixed delay |
/// | Timeout | Retry up to `max-retries`, fixed delay |
/// | Connection error | Retry up to `max-retries`, fixed delay |
/// | Non-HTML body | Immediate failure |
pub struct HttpFetcher {
    client: Client,
    download_delay: Duration,
    retry_delay: Duration,
    max_retries: u32,
}

impl HttpFetcher {
    /// Creates a fetcher from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.request_timeout),
        )?;

        Ok(Self {
            client,
            download_delay: Duration::from_millis(config.download_delay),
            retry_delay: Duration::from_millis(config.retry_delay),
            max_retries: config.max_retries,
        })
    }

    /// One GET attempt, classified into the failure taxonomy
    async fn attempt(&self, url: &Url) -> Result<(Url, u16, String), FetchFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        let final_url = response.url().clone();

        if !status.is_success() {
            return Err(FetchFailure::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // A missing Content-Type header is tolerated; an explicit non-HTML
        // one is not.
        if !content_type.is_empty() && !content_type.contains("text/html") {
            return Err(FetchFailure::ContentMismatch {
                url: url.to_string(),
                content_type,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        Ok((final_url, status.as_u16(), body))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: CrawlRequest) -> Result<CrawlResponse, FetchFailure> {
        // Politeness delay applies to every request, retries included
        if !self.download_delay.is_zero() {
            tokio::time::sleep(self.download_delay).await;
        }

        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.attempt(&request.url).await {
                Ok((url, status, body)) => {
                    return Ok(CrawlResponse {
                        url,
                        status,
                        body,
                        phase: request.phase,
                        carried: request.carried,
                    });
                }
                Err(failure) if failure.is_retryable() && attempts <= self.max_retries => {
                    tracing::warn!(
                        "Fetch attempt {}/{} failed for {}: {}",
                        attempts,
                        self.max_retries + 1,
                        request.url,
                        failure
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(failure) => return Err(failure),
            }
        }
    }
}

fn classify_transport_error(url: &Url, error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchFailure::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
