use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the UniDrop application data root directory.
///
/// 获取 UniDrop 应用数据根目录。
///
/// # Behavior / 行为
/// - This function does not automatically create directories.
/// - The caller decides when to create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join("UniDrop"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_data_dir_returns_path() {
        let path = app_data_dir().expect("Should be able to get app data dir");
        assert!(path.ends_with("UniDrop"));
    }
}
