use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;
use ud_core::{ports::RegistryStorePort, FileRecord};

/// File-backed registry slot.
///
/// One JSON document holding the full record sequence, overwritten on every
/// mutation. A single fixed entry: whole-sequence reads and writes only,
/// never a partial update.
pub struct FileRegistryStore {
    path: PathBuf,
}

impl FileRegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Place the slot file inside the data directory, named per config.
    pub fn from_config(data_dir: &Path, config: &ud_core::config::StorageConfig) -> Self {
        Self::new(data_dir.join(&config.registry_file_name))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create registry dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write through a temp file and rename, so the slot is always either
    /// the previous sequence or the fully written new one.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp registry failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp registry to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl RegistryStorePort for FileRegistryStore {
    /// Load the persisted sequence.
    ///
    /// A missing slot is a fresh start and an unparsable slot is recovered
    /// as empty; neither reaches the caller as an error.
    async fn load(&self) -> Result<Vec<FileRecord>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read registry failed: {}", self.path.display()))
            }
        };

        match serde_json::from_str::<Vec<FileRecord>>(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "registry slot unparsable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, records: &[FileRecord]) -> Result<()> {
        let content = serde_json::to_string(records).context("serialize registry failed")?;
        self.atomic_write(&content).await
    }
}
