use crate::error::CrawlerError;
use std::{
    ops::AddAssign,
    path::{Path, PathBuf},
};

pub const DEFAULT_MAX_LINKS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    output_directory: PathBuf,
    max_links_per_page: usize,
}

impl CrawlConfig {
    pub fn new<P: Into<PathBuf>>(
        output_directory: P,
        max_links_per_page: usize,
    ) -> Result<Self, CrawlerError> {
        let output_directory = output_directory.into();
        if output_directory.as_os_str().is_empty() {
            return Err(CrawlerError::InvalidArgument("output directory"));
        }
        Ok(CrawlConfig {
            output_directory,
            max_links_per_page,
        })
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn max_links_per_page(&self) -> usize {
        self.max_links_per_page
    }
}

/// What the transport saw for a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFetchResult {
    pub url: String,
    pub succeeded: bool,
    pub status_code: Option<u16>,
    pub body: Option<String>,
}

impl PageFetchResult {
    pub fn success<U: Into<String>, B: Into<String>>(url: U, status_code: u16, body: B) -> Self {
        PageFetchResult {
            url: url.into(),
            succeeded: true,
            status_code: Some(status_code),
            body: Some(body.into()),
        }
    }

    pub fn failure<U: Into<String>>(url: U, status_code: Option<u16>) -> Self {
        PageFetchResult {
            url: url.into(),
            succeeded: false,
            status_code,
            body: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_saved: usize,
    pub failures: usize,
}

impl AddAssign for CrawlSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.pages_saved += rhs.pages_saved;
        self.failures += rhs.failures;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_output_directory_is_rejected() {
        assert!(matches!(
            CrawlConfig::new("", 3),
            Err(CrawlerError::InvalidArgument("output directory"))
        ));
    }

    #[test]
    fn test_config_keeps_values() {
        let config = CrawlConfig::new("./", 5).unwrap();
        assert_eq!(config.output_directory(), Path::new("./"));
        assert_eq!(config.max_links_per_page(), 5);
    }

    #[test]
    fn test_summary_add_assign() {
        let mut total = CrawlSummary {
            pages_saved: 1,
            failures: 0,
        };
        total += CrawlSummary {
            pages_saved: 2,
            failures: 3,
        };
        assert_eq!(
            total,
            CrawlSummary {
                pages_saved: 3,
                failures: 3
            }
        );
    }
}
