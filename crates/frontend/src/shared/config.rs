use contracts::enums::ThemeMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default = "default_mode")]
    pub default_mode: ThemeMode,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
log_level = "debug"

[theme]
default_mode = "light"
storage_key = "app-ui-theme"
"#;

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_storage_key() -> String {
    "app-ui-theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            storage_key: default_storage_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            theme: ThemeConfig::default(),
        }
    }
}

impl UiConfig {
    /// Unknown level names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load the embedded UI configuration
pub fn load_config() -> Result<UiConfig, toml::de::Error> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<UiConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.theme.storage_key, "app-ui-theme");
        assert_eq!(config.theme.default_mode, ThemeMode::Light);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config("[theme]\nstorage_key = \"ui-theme\"\n").unwrap();
        assert_eq!(config.theme.storage_key, "ui-theme");
        assert_eq!(config.theme.default_mode, ThemeMode::Light);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(parse_config("[theme]\ndefault_mode = \"purple\"\n").is_err());
    }

    #[test]
    fn test_log_level_parse() {
        let config = parse_config("log_level = \"warn\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
