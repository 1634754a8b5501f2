use anyhow::Result;
use async_trait::async_trait;

use crate::registry::FileRecord;

/// RegistryStorePort
///
/// 负责文件列表（整个序列）的持久化与加载。
///
/// Contract:
/// - the slot holds one serialized sequence under a fixed key
/// - every mutation persists the full sequence, never a partial write
/// - an absent or unparsable slot loads as an empty sequence; a parse
///   failure is recovered locally and never reaches the caller
/// - last writer wins across concurrent slot owners; no conflict detection
#[async_trait]
pub trait RegistryStorePort: Send + Sync {
    /// Load the persisted sequence, in insertion order.
    async fn load(&self) -> Result<Vec<FileRecord>>;

    /// Overwrite the slot with the full current sequence.
    async fn persist(&self, records: &[FileRecord]) -> Result<()>;
}
