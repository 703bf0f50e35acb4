use crate::{error::CrawlerError, http, DEFAULT_MAX_LINKS_PER_PAGE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED_URL: &str = "https://dandadan.net/";
pub const DEFAULT_DEPTH: u32 = 2;

/// Run settings for the binary, loadable from a JSON file.
///
/// Keys missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub url: String,
    pub output_dir: PathBuf,
    pub max_links: usize,
    pub depth: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url: DEFAULT_SEED_URL.to_string(),
            output_dir: PathBuf::from("./"),
            max_links: DEFAULT_MAX_LINKS_PER_PAGE,
            depth: DEFAULT_DEPTH,
            timeout_secs: http::DEFAULT_TIMEOUT.as_secs(),
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, CrawlerError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// A zero timeout would make reqwest fail every request immediately.
    pub fn validate(&self) -> Result<(), CrawlerError> {
        if self.timeout_secs == 0 {
            return Err(CrawlerError::InvalidArgument("timeout"));
        }
        Ok(())
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlerError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CrawlerError::ReadSettings {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }
}
