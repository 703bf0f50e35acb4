use std::path::Path;

pub mod crawler;
pub mod http;
pub mod links;
pub mod persistent;
pub mod settings;

mod data;
mod error;
mod utils;

pub use crawler::Crawler;
pub use data::{CrawlConfig, CrawlSummary, PageFetchResult, DEFAULT_MAX_LINKS_PER_PAGE};
pub use error::{ConfigError, CrawlerError, FetchError};
pub use http::HttpTransport;
pub use links::{extract_links, is_qualifying_link};
pub use persistent::FsStorage;
pub use settings::Settings;
pub use utils::derive_filename;

/// Issues a GET and reports the outcome.
///
/// A response with any status is `Ok`; `Err` is reserved for failures where no
/// response arrived at all.
#[async_trait::async_trait]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<PageFetchResult, FetchError>;
}

/// Sink for fetched pages. `write` creates the file or overwrites it.
#[async_trait::async_trait]
pub trait Storage {
    async fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}
