use crate::{error::CrawlerError, FetchError, PageFetchResult, Transport};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `Transport` backed by a shared `reqwest::Client`.
///
/// Redirects are followed by the client itself.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, CrawlerError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(CrawlerError::HttpClient)?;
        Ok(HttpTransport { client })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<PageFetchResult, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(PageFetchResult::failure(url, Some(status.as_u16())));
        }

        let body = response.text().await?;
        Ok(PageFetchResult::success(url, status.as_u16(), body))
    }
}
