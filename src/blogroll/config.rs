use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXCERPT_LENGTH: usize = 120;
const DEFAULT_EXCERPT_SUFFIX: &str = "...";

/// Configuration for blogroll, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// Characters of content used when a post has no excerpt
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,

    /// Appended to every generated excerpt
    #[serde(default = "default_excerpt_suffix")]
    pub excerpt_suffix: String,

    /// JSON document the file provider reads posts and categories from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_excerpt_length() -> usize {
    DEFAULT_EXCERPT_LENGTH
}

fn default_excerpt_suffix() -> String {
    DEFAULT_EXCERPT_SUFFIX.to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            excerpt_suffix: default_excerpt_suffix(),
            data_file: None,
        }
    }
}

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BlogError::Io)?;
        let config: BlogConfig =
            serde_json::from_str(&content).map_err(BlogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BlogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BlogError::Serialization)?;
        fs::write(config_path, content).map_err(BlogError::Io)?;
        Ok(())
    }

    /// Relative `data_file` entries resolve against `config_dir`.
    pub fn data_file_in<P: AsRef<Path>>(&self, config_dir: P) -> Option<PathBuf> {
        self.data_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                config_dir.as_ref().join(path)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.excerpt_length, 120);
        assert_eq!(config.excerpt_suffix, "...");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let config = BlogConfig {
            excerpt_length: 40,
            data_file: Some(PathBuf::from("posts.json")),
            ..BlogConfig::default()
        };
        config.save(&dir).unwrap();

        let loaded = BlogConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"excerpt_suffix": " [more]", "theme": "dark"}"#,
        )
        .unwrap();

        let loaded = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.excerpt_length, 120);
        assert_eq!(loaded.excerpt_suffix, " [more]");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        match BlogConfig::load(temp_dir.path()) {
            Err(BlogError::Serialization(_)) => {}
            other => panic!("Expected Serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_relative_data_file_resolves_against_config_dir() {
        let config = BlogConfig {
            data_file: Some(PathBuf::from("posts.json")),
            ..BlogConfig::default()
        };
        assert_eq!(
            config.data_file_in("/etc/blogroll"),
            Some(PathBuf::from("/etc/blogroll/posts.json"))
        );
    }
}
