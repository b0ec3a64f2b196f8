use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DeskmindError, Result};

/// Top-level configuration for the Deskmind application.
///
/// Loaded from `~/.deskmind/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskmindConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for DeskmindConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            chat: ChatSettings::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl DeskmindConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DeskmindConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| DeskmindError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// API server port (localhost only).
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: 4810,
            log_level: "info".to_string(),
        }
    }
}

/// Chat conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Language the conversation starts in (ISO 639-1 code).
    pub default_language: String,
    /// Maximum user message length in characters.
    pub max_message_chars: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            max_message_chars: 2000,
        }
    }
}

/// Completion provider settings.
///
/// `api_key` may be absent: that is a valid, expected state in which every
/// turn is answered by the deterministic local fallback instead of a live
/// provider call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key. Usually left unset here and supplied via the
    /// `DESKMIND_API_KEY` or `OPENAI_API_KEY` environment variable.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Upper bound on completion tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = DeskmindConfig::default();
        assert_eq!(config.general.port, 4810);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.default_language, "en");
        assert_eq!(config.chat.max_message_chars, 2000);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.model, "gpt-4");
        assert_eq!(config.provider.max_tokens, 500);
        assert!((config.provider.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
port = 8080
log_level = "debug"

[chat]
default_language = "fr"
max_message_chars = 500

[provider]
api_key = "sk-test"
base_url = "http://localhost:11434/v1"
model = "llama3"
max_tokens = 256
temperature = 0.2
"#;
        let file = create_temp_config(content);
        let config = DeskmindConfig::load(file.path()).unwrap();
        assert_eq!(config.general.port, 8080);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.default_language, "fr");
        assert_eq!(config.chat.max_message_chars, 500);
        assert_eq!(config.provider.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.provider.base_url, "http://localhost:11434/v1");
        assert_eq!(config.provider.model, "llama3");
        assert_eq!(config.provider.max_tokens, 256);
        assert!((config.provider.temperature - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = DeskmindConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        // Remaining fields use defaults
        assert_eq!(config.general.port, 4810);
        assert_eq!(config.chat.default_language, "en");
        assert_eq!(config.provider.model, "gpt-4");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = DeskmindConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.port, 4810);
        assert_eq!(config.chat.default_language, "en");
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "this is {{ not valid TOML";
        let file = create_temp_config(content);
        let result = DeskmindConfig::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = DeskmindConfig::default();
        config.save(&path).unwrap();

        let reloaded = DeskmindConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.port, config.general.port);
        assert_eq!(reloaded.chat.default_language, config.chat.default_language);
        assert_eq!(reloaded.provider.model, config.provider.model);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let config = DeskmindConfig::default();
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = DeskmindConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = DeskmindConfig::load(file.path()).unwrap();
        assert_eq!(config.general.port, 4810);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.max_tokens, 500);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = DeskmindConfig::default();
        config.provider.api_key = Some("sk-roundtrip".to_string());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: DeskmindConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.general.port, config.general.port);
        assert_eq!(
            deserialized.provider.api_key.as_deref(),
            Some("sk-roundtrip")
        );
    }

    #[test]
    fn test_sub_config_defaults() {
        let general = GeneralConfig::default();
        assert_eq!(general.port, 4810);
        assert_eq!(general.log_level, "info");

        let chat = ChatSettings::default();
        assert_eq!(chat.default_language, "en");
        assert_eq!(chat.max_message_chars, 2000);

        let provider = ProviderConfig::default();
        assert!(provider.api_key.is_none());
        assert_eq!(provider.max_tokens, 500);
    }
}
