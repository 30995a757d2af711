use crate::commands::CorpusPaths;
use crate::error::{CorpusError, Result};
use crate::model::FieldTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_ROOT: &str = "json";

/// Corpus layout and field tables, stored in `<root>/config.json`.
///
/// Every key is optional; missing keys take the standard layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    #[serde(default = "default_custom_dir")]
    pub custom_dir: String,

    #[serde(default = "default_adaption_dir")]
    pub adaption_dir: String,

    /// Canonical license records
    #[serde(default = "default_details_dir")]
    pub details_dir: String,

    /// Canonical exception records
    #[serde(default = "default_exceptions_dir")]
    pub exceptions_dir: String,

    #[serde(default = "default_custom_index")]
    pub custom_index: String,

    #[serde(default = "default_adaption_index")]
    pub adaption_index: String,

    #[serde(default)]
    pub fields: FieldTable,
}

fn default_custom_dir() -> String {
    "custom".to_string()
}

fn default_adaption_dir() -> String {
    "adaptions".to_string()
}

fn default_details_dir() -> String {
    "details".to_string()
}

fn default_exceptions_dir() -> String {
    "exceptions".to_string()
}

fn default_custom_index() -> String {
    "custom.json".to_string()
}

fn default_adaption_index() -> String {
    "adaptions.json".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            custom_dir: default_custom_dir(),
            adaption_dir: default_adaption_dir(),
            details_dir: default_details_dir(),
            exceptions_dir: default_exceptions_dir(),
            custom_index: default_custom_index(),
            adaption_index: default_adaption_index(),
            fields: FieldTable::default(),
        }
    }
}

impl CorpusConfig {
    /// Load config from the corpus root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CorpusError::Io)?;
        let config: CorpusConfig =
            serde_json::from_str(&content).map_err(CorpusError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded corpus config");
        Ok(config)
    }

    /// Resolve every configured location against `root`.
    pub fn paths<P: AsRef<Path>>(&self, root: P) -> CorpusPaths {
        let root = root.as_ref();
        CorpusPaths {
            root: root.to_path_buf(),
            custom: root.join(&self.custom_dir),
            adaptions: root.join(&self.adaption_dir),
            details: root.join(&self.details_dir),
            exceptions: root.join(&self.exceptions_dir),
            custom_index: root.join(&self.custom_index),
            adaption_index: root.join(&self.adaption_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CorpusConfig::default();
        assert_eq!(config.custom_dir, "custom");
        assert_eq!(config.custom_index, "custom.json");
        assert_eq!(config.fields, FieldTable::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = CorpusConfig::load(temp.path()).unwrap();
        assert_eq!(config, CorpusConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"details_dir": "licenses", "adaption_index": "adapted.json"}"#,
        )
        .unwrap();

        let config = CorpusConfig::load(temp.path()).unwrap();
        assert_eq!(config.details_dir, "licenses");
        assert_eq!(config.adaption_index, "adapted.json");
        assert_eq!(config.custom_dir, "custom");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "custom_dir = 1").unwrap();

        assert!(matches!(
            CorpusConfig::load(temp.path()),
            Err(CorpusError::Serialization(_))
        ));
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let paths = CorpusConfig::default().paths("data");
        assert_eq!(paths.custom, Path::new("data/custom"));
        assert_eq!(paths.adaption_index, Path::new("data/adaptions.json"));
        assert_eq!(paths.exceptions, Path::new("data/exceptions"));
    }
}
