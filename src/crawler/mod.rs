use crate::{
    data::{CrawlConfig, CrawlSummary, PageFetchResult, DEFAULT_MAX_LINKS_PER_PAGE},
    error::{ConfigError, CrawlerError, FetchError},
    links::{extract_links, is_qualifying_link},
    utils::derive_filename,
    Storage, Transport,
};
use futures::future::{BoxFuture, FutureExt};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Depth-first crawler: fetch, save, extract, then recurse into the first
/// `max_links_per_page` qualifying links with one less hop of depth.
///
/// There is no visited set. A page reachable along several paths is fetched
/// once per path, bounded only by the depth budget.
pub struct Crawler<T, S> {
    transport: T,
    storage: S,
    output_directory: Option<PathBuf>,
    max_links_per_page: usize,
}

impl<T, S> Crawler<T, S>
where
    T: Transport + Sync,
    S: Storage + Sync,
{
    pub fn new(transport: T, storage: S) -> Self {
        Crawler {
            transport,
            storage,
            output_directory: None,
            max_links_per_page: DEFAULT_MAX_LINKS_PER_PAGE,
        }
    }

    pub fn configure<P: Into<PathBuf>>(
        &mut self,
        output_directory: P,
        max_links_per_page: usize,
    ) -> Result<(), CrawlerError> {
        self.set_output_directory(output_directory)?;
        self.set_max_links_per_page(max_links_per_page);
        Ok(())
    }

    pub fn set_output_directory<P: Into<PathBuf>>(
        &mut self,
        output_directory: P,
    ) -> Result<(), CrawlerError> {
        let output_directory = output_directory.into();
        if output_directory.as_os_str().is_empty() {
            return Err(CrawlerError::InvalidArgument("output directory"));
        }
        self.output_directory = Some(output_directory);
        Ok(())
    }

    pub fn set_max_links_per_page(&mut self, max_links_per_page: usize) {
        self.max_links_per_page = max_links_per_page;
    }

    /// Snapshot of the settings a crawl would run with.
    pub fn config(&self) -> Result<CrawlConfig, CrawlerError> {
        let output_directory = self
            .output_directory
            .clone()
            .ok_or(ConfigError::NotConfigured)?;
        CrawlConfig::new(output_directory, self.max_links_per_page)
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    fn storage(&self) -> &S {
        &self.storage
    }

    /// Crawls `url` and up to `depth` hops below it.
    ///
    /// Only precondition failures are returned. Fetch and write failures end
    /// their own branch, get logged, and are counted in the summary.
    pub async fn crawl(&self, url: &str, depth: u32) -> Result<CrawlSummary, CrawlerError> {
        let config = self.config()?;
        if url.is_empty() {
            return Err(CrawlerError::InvalidArgument("url"));
        }

        let summary = self.visit(&config, url.to_string(), depth).await;
        info!(
            "Crawl of {} finished: {} page(s) saved, {} failure(s)",
            url, summary.pages_saved, summary.failures
        );
        Ok(summary)
    }

    fn visit<'a>(
        &'a self,
        config: &'a CrawlConfig,
        url: String,
        depth: u32,
    ) -> BoxFuture<'a, CrawlSummary> {
        async move {
            let mut summary = CrawlSummary::default();

            let body = match self.fetch_and_save(config, &url).await {
                Ok(body) => {
                    summary.pages_saved += 1;
                    body
                }
                Err(e) => {
                    warn!("Failed to load page {}: {}", url, e);
                    summary.failures += 1;
                    return summary;
                }
            };

            if depth == 0 {
                return summary;
            }

            let children: Vec<String> = extract_links(&body)
                .into_iter()
                .filter(|link| is_qualifying_link(link))
                .take(config.max_links_per_page())
                .collect();
            debug!("Following {} link(s) from {}", children.len(), url);

            for child in children {
                summary += self.visit(config, child, depth - 1).await;
            }
            summary
        }
        .boxed()
    }

    async fn fetch_and_save(&self, config: &CrawlConfig, url: &str) -> Result<String, CrawlerError> {
        debug!("Visit {}", url);
        let page = self.transport.get(url).await?;
        let body = page_body(page)?;

        let path = config.output_directory().join(derive_filename(url));
        self.storage
            .write(&path, &body)
            .await
            .map_err(|source| CrawlerError::Write {
                path: path.clone(),
                source,
            })?;
        info!("Saved {} to {}", url, path.display());

        Ok(body)
    }
}

fn page_body(page: PageFetchResult) -> Result<String, FetchError> {
    if !page.succeeded {
        return Err(match page.status_code {
            Some(status) => FetchError::Status(status),
            None => FetchError::Transport(format!("no response from {}", page.url)),
        });
    }
    Ok(page.body.unwrap_or_default())
}
