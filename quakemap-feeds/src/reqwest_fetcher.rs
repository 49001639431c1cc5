use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::FeedError,
    fetcher::{with_timeout, FeedFetcher},
};

/// HTTP fetcher with a deadline covering the request and the body download.
pub struct ReqwestFeedFetcher {
    client: Client,
    timeout: Duration,
}

impl ReqwestFeedFetcher {
    pub fn try_new(timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Use a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl FeedFetcher for ReqwestFeedFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        log::debug!("GET {url}");
        with_timeout(url, self.timeout, async {
            let resp = self.client.get(url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FeedError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            Ok(resp.text().await?)
        })
        .await
    }
}
