use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{QuickTranslateError, Result};
use crate::language::{Language, LanguagePair};

/// Configuration file looked up in the current directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "quick-translate.toml";

fn default_endpoint() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_user_agent() -> String {
    format!("quick-translate/{}", env!("CARGO_PKG_VERSION"))
}

fn default_source() -> Language {
    Language::English
}

fn default_target() -> Language {
    Language::Spanish
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(".quick-translate/log")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// MyMemory `get` endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Source language selected when the widget starts
    #[serde(default = "default_source")]
    pub source: Language,
    /// Target language selected when the widget starts
    #[serde(default = "default_target")]
    pub target: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log file
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
        }
    }
}

impl SessionConfig {
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.source, self.target)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuickTranslateError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| QuickTranslateError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QuickTranslateError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| QuickTranslateError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load the explicit path if given, otherwise the default file when present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                info!("Found {} in current directory, loading...", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.translate.endpoint, "https://api.mymemory.translated.net/get");
        assert_eq!(config.session.pair(), LanguagePair::new(Language::English, Language::Spanish));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\ntarget = \"ja\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.session.source, Language::English);
        assert_eq!(config.session.target, Language::Japanese);
        assert_eq!(config.translate, TranslateConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quick-translate.toml");

        let mut config = Config::default();
        config.translate.endpoint = "http://localhost:8080/get".to_string();
        config.session.source = Language::German;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_language_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nsource = \"xx\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, QuickTranslateError::Config(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
