//! # Watch Configuration
//!
//! The YAML file that names which settings keys are policy-relevant and
//! which are volatile noise:
//!
//! ```yaml
//! tracked_keys:
//!   - whoCanJoin
//!   - whoCanPostMessage
//! excluded_keys:
//!   - etag
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use driftwatch_core::KeyPolicy;

/// Key configuration for a drift watch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Policy-relevant keys feeding the business hash.
    #[serde(default)]
    pub tracked_keys: Vec<String>,
    /// Volatile keys removed before the full hash. Defaults to the
    /// upstream revision tag.
    #[serde(default = "default_excluded_keys")]
    pub excluded_keys: Vec<String>,
}

fn default_excluded_keys() -> Vec<String> {
    vec!["etag".to_string()]
}

impl WatchConfig {
    /// Load a watch configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config YAML: {}", path.display()))?;
        Ok(config)
    }

    /// Build the key policy this configuration describes.
    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::new(self.tracked_keys.iter().cloned(), self.excluded_keys.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_tracked_and_excluded_keys() {
        let file = write_config(
            "tracked_keys:\n  - whoCanJoin\n  - whoCanPostMessage\nexcluded_keys:\n  - etag\n  - kind\n",
        );
        let config = WatchConfig::load(file.path()).unwrap();
        let policy = config.key_policy();
        assert!(policy.is_tracked("whoCanJoin"));
        assert!(policy.is_excluded("kind"));
    }

    #[test]
    fn excluded_keys_default_to_etag() {
        let file = write_config("tracked_keys:\n  - whoCanJoin\n");
        let config = WatchConfig::load(file.path()).unwrap();
        assert_eq!(config.excluded_keys, ["etag"]);
    }

    #[test]
    fn missing_file_is_an_error_with_path_context() {
        let err = WatchConfig::load(Path::new("/nonexistent/watch.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("watch.yaml"));
    }
}
