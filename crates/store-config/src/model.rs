use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Stores user-configurable client preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    /// Reject sales above the current stock before they reach the backend.
    #[serde(default = "Config::default_check_stock")]
    pub check_stock_before_sale: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::default_api_base_url(),
            locale: Self::default_locale(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
            check_stock_before_sale: Self::default_check_stock(),
        }
    }
}

impl Config {
    pub const KEYS: &'static [&'static str] = &[
        "api_base_url",
        "locale",
        "currency_symbol",
        "ui_color_enabled",
        "plain_output",
        "high_contrast",
        "check_stock_before_sale",
    ];

    pub fn default_api_base_url() -> String {
        "http://localhost:8080/api/v1".into()
    }

    pub fn default_locale() -> String {
        "ru-RU".into()
    }

    pub fn default_currency_symbol() -> String {
        "₽".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_check_stock() -> bool {
        true
    }

    /// Base URL to use for requests; `API_BASE_URL` wins over the stored value.
    pub fn resolve_api_base_url(&self) -> String {
        std::env::var(API_BASE_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api_base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid(key, value));
                }
                self.api_base_url = value.trim_end_matches('/').to_string();
            }
            "locale" => self.locale = non_empty(key, value)?,
            "currency_symbol" => self.currency_symbol = non_empty(key, value)?,
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "plain_output" => self.accessibility.plain_output = parse_flag(key, value)?,
            "high_contrast" => self.accessibility.high_contrast = parse_flag(key, value)?,
            "check_stock_before_sale" => self.check_stock_before_sale = parse_flag(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_base_url", self.api_base_url.clone()),
            ("locale", self.locale.clone()),
            ("currency_symbol", self.currency_symbol.clone()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.accessibility.plain_output.to_string()),
            ("high_contrast", self.accessibility.high_contrast.to_string()),
            (
                "check_stock_before_sale",
                self.check_stock_before_sale.to_string(),
            ),
        ]
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(invalid(key, value))
    } else {
        Ok(value.to_string())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
