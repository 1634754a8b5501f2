use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::registry::MimeType;

/// Materializes a payload as a user-visible saved file.
///
/// Side effect only; the registry is never mutated by a download.
#[async_trait]
pub trait DownloadSinkPort: Send + Sync {
    /// Write `bytes` under `name`, typed by `mime_type`, and return the
    /// destination path.
    async fn save(&self, name: &str, mime_type: &MimeType, bytes: &[u8]) -> Result<PathBuf>;
}
