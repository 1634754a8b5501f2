use std::path::Path;
use tracing::warn;
use ud_core::AppConfig;

/// Load the application configuration from a JSON file.
///
/// 从 JSON 文件加载应用配置。
///
/// A missing or unparsable file yields the defaults; configuration trouble
/// must never keep the application from starting.
pub fn load_config(path: &Path) -> AppConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
            return AppConfig::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config unparsable, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("config.json"));
        assert_eq!(config.storage.registry_file_name, "files.json");
    }

    #[test]
    fn unparsable_config_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let config = load_config(&path);
        assert_eq!(config.storage.downloads_dir_name, "downloads");
    }

    #[test]
    fn config_file_overrides_are_honored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"capture": {"frame_width": 320, "frame_height": 240}}"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.capture.frame_width, 320);
        assert_eq!(config.capture.frame_height, 240);
        // untouched sections keep their defaults
        assert_eq!(config.storage.registry_file_name, "files.json");
    }
}
