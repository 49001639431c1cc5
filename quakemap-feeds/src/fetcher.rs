use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use geojson::GeoJson;

use crate::{error::FeedError, reqwest_fetcher::ReqwestFeedFetcher, source::FeedSource};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves the body of a remote document
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError>;
}

pub fn make_feed_fetcher(timeout: Duration) -> Result<Arc<dyn FeedFetcher>, FeedError> {
    Ok(Arc::new(ReqwestFeedFetcher::try_new(timeout)?))
}

/// Run `fut`, failing with [`FeedError::Timeout`] if it takes longer than `timeout`
pub async fn with_timeout<T>(
    url: &str,
    timeout: Duration,
    fut: impl Future<Output = Result<T, FeedError>>,
) -> Result<T, FeedError> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(FeedError::Timeout {
            url: url.to_string(),
            timeout,
        }),
    }
}

/// Load and parse the GeoJSON document behind `source`
pub async fn load_document(
    fetcher: &dyn FeedFetcher,
    source: &FeedSource,
) -> Result<GeoJson, FeedError> {
    let text = match source {
        FeedSource::Url(url) => fetcher.fetch_text(url).await?,
        FeedSource::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FeedError::Io {
                    path: path.clone(),
                    source,
                })?
        }
    };
    log::debug!("Loaded {} bytes from {}", text.len(), source);
    Ok(text.parse::<GeoJson>()?)
}
