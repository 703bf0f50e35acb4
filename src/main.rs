use clap::Parser;
use simple_crawler::{Crawler, CrawlerError, FsStorage, HttpTransport, Settings};
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Fetch a page, save it, and follow its links a few hops deep.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed URL
    url: Option<String>,

    /// JSON settings file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the fetched pages are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Maximum number of links followed from each page
    #[arg(short, long)]
    max_links: Option<usize>,

    /// Number of hops to follow from the seed
    #[arg(short, long)]
    depth: Option<u32>,

    /// Request timeout in seconds, must be at least 1
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long)]
    user_agent: Option<String>,
}

impl Args {
    async fn into_settings(self) -> Result<Settings, CrawlerError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path).await?,
            None => Settings::default(),
        };

        if let Some(url) = self.url {
            settings.url = url;
        }
        if let Some(output_dir) = self.output_dir {
            settings.output_dir = output_dir;
        }
        if let Some(max_links) = self.max_links {
            settings.max_links = max_links;
        }
        if let Some(depth) = self.depth {
            settings.depth = depth;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            settings.user_agent = user_agent;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "info,hyper=warn,reqwest=info".into()),
        )
        .with(ErrorLayer::default())
        .init();

    let settings = Args::parse().into_settings().await?;
    info!(
        "Crawling {} (depth {}, {} link(s) per page) into {}",
        settings.url,
        settings.depth,
        settings.max_links,
        settings.output_dir.display()
    );

    let transport = HttpTransport::new(
        Duration::from_secs(settings.timeout_secs),
        &settings.user_agent,
    )?;
    let mut crawler = Crawler::new(transport, FsStorage);
    crawler.configure(&settings.output_dir, settings.max_links)?;
    FsStorage::prepare_dir(&settings.output_dir).await?;

    // Failed pages are only logged; the run itself still succeeds.
    crawler.crawl(&settings.url, settings.depth).await?;

    Ok(())
}
