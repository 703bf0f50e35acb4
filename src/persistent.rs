use crate::Storage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes pages straight to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    /// Makes sure `dir` exists so later writes into it can succeed.
    pub async fn prepare_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        debug!("Output directory ready at {}", dir.display());
        Ok(dir.to_path_buf())
    }
}

#[async_trait::async_trait]
impl Storage for FsStorage {
    async fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
