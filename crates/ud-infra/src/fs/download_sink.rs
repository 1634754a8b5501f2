use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use ud_core::{ports::DownloadSinkPort, MimeType};

/// Saves payloads into a downloads directory, named after the record.
///
/// 把文件内容落盘到下载目录。
pub struct DownloadsDirSink {
    root: PathBuf,
}

impl DownloadsDirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Place the downloads directory inside the data directory, named per
    /// config.
    pub fn from_config(data_dir: &Path, config: &ud_core::config::StorageConfig) -> Self {
        Self::new(data_dir.join(&config.downloads_dir_name))
    }

    /// Record names come from user input; only the final path component is
    /// ever used as the destination file name.
    fn sanitize_name(name: &str) -> String {
        Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty() && *n != "." && *n != "..")
            .unwrap_or(FALLBACK_FILE_NAME)
            .to_string()
    }
}

#[async_trait]
impl DownloadSinkPort for DownloadsDirSink {
    async fn save(&self, name: &str, mime_type: &MimeType, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).await?;

        let file_name = Self::sanitize_name(name);
        let dest = self.root.join(&file_name);
        fs::write(&dest, bytes).await?;

        info!(
            name = %file_name,
            mime = %mime_type,
            size_bytes = bytes.len(),
            dest = %dest.display(),
            "materialized download"
        );
        Ok(dest)
    }
}

const FALLBACK_FILE_NAME: &str = "download";
