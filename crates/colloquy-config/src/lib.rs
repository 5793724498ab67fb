use colloquy_engine::models::AuthTokens;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Base URL of the development API server, used when no config file exists.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

/// Persisted auth tokens, living next to the config file.
///
/// The store is what survives app restarts: tokens are written on login,
/// re-read on startup for session resume, and cleared on logout or when the
/// server rejects them.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// A store at an explicit path (tests use a tempdir).
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The default on-disk location, in the colloquy config directory.
    pub fn default_store() -> Self {
        Self::at(config_dir().join("tokens.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<AuthTokens>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| ConfigError::ConfigReadError {
                config_path: self.path.clone(),
                source,
            })?;

        let tokens: AuthTokens =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: self.path.clone(),
                source,
            })?;

        Ok(Some(tokens))
    }

    pub fn save(&self, tokens: &AuthTokens) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(tokens)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Removes the stored tokens. Clearing an already-empty store is fine.
    pub fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn config_dir() -> PathBuf {
    let dir = shellexpand::tilde("~/.config/colloquy");
    PathBuf::from(dir.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/colloquy/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            api_base_url: "https://chat.example.com/api".to_string(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_load_missing_config_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let loaded = Config::load_from_path(&missing).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::default();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = [not toml").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_token_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::at(temp_dir.path().join("tokens.toml"));

        assert!(store.load().unwrap().is_none());

        let tokens = AuthTokens {
            access: "access-token".to_string(),
            refresh: Some("refresh-token".to_string()),
        };
        store.save(&tokens).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, tokens);
    }

    #[test]
    fn test_token_store_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::at(temp_dir.path().join("tokens.toml"));

        let tokens = AuthTokens {
            access: "abc".to_string(),
            refresh: None,
        };
        store.save(&tokens).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing again must not fail.
        store.clear().unwrap();
    }
}
