//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only what the orchestration layer needs; the hosting shell decides where
/// the data directory itself lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Capture settings
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the registry slot inside the data directory.
    pub registry_file_name: String,

    /// Directory name for materialized downloads inside the data directory.
    pub downloads_dir_name: String,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Frame width for the synthetic camera adapter.
    pub frame_width: u32,

    /// Frame height for the synthetic camera adapter.
    pub frame_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            registry_file_name: "files.json".to_string(),
            downloads_dir_name: "downloads".to_string(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
        }
    }
}
