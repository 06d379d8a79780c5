//! # Application Configuration
//!
//! Window, instance and validation settings for the bootstrap. Every value has
//! a default matching the stock build (800×600 "Vulkan" window, validation in
//! debug builds only), and any of them can be overridden from a TOML or RON
//! file through [`Config`].

use serde::Deserialize;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// Layer requested when validation is on
pub const KHRONOS_VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Vulkan".to_string(),
        }
    }
}

/// # Instance Configuration
///
/// Application metadata handed to the driver at instance creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Application name for Vulkan instance creation
    pub application_name: String,
    /// Application version (major, minor, patch)
    pub application_version: (u32, u32, u32),
    /// Engine name for Vulkan instance creation
    pub engine_name: String,
    /// Engine version (major, minor, patch)
    pub engine_version: (u32, u32, u32),
    /// Targeted Vulkan API version (major, minor)
    pub api_version: (u32, u32),
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            application_name: "VkPlay".to_string(),
            application_version: (1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: (1, 0, 0),
            api_version: (1, 0),
        }
    }
}

/// # Application Configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Window settings
    pub window: WindowConfig,
    /// Instance metadata
    pub instance: InstanceConfig,
    /// Whether to enable Vulkan validation layers
    pub enable_validation: Option<bool>,
    /// Layers that must be present when validation is enabled
    pub validation_layers: Vec<String>,
}

impl AppConfig {
    /// Enable or disable validation layers
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.enable_validation = Some(enabled);
        self
    }

    /// Replace the required validation layer list
    pub fn with_validation_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validation_layers = layers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether validation is on
    ///
    /// Unset means "debug builds only".
    pub fn validation_enabled(&self) -> bool {
        self.enable_validation.unwrap_or(cfg!(debug_assertions))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }

        if self.window.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        if self.instance.application_name.is_empty() {
            return Err("Application name cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            instance: InstanceConfig::default(),
            enable_validation: None,
            validation_layers: vec![KHRONOS_VALIDATION_LAYER.to_string()],
        }
    }
}

impl Config for AppConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Vulkan");
        assert_eq!(config.instance.application_version, (1, 0, 0));
        assert_eq!(config.validation_layers, vec![KHRONOS_VALIDATION_LAYER.to_string()]);
        assert_eq!(config.validation_enabled(), cfg!(debug_assertions));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_validation_overrides_build() {
        assert!(AppConfig::default().with_validation(true).validation_enabled());
        assert!(!AppConfig::default().with_validation(false).validation_enabled());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.window.title.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.instance.application_name.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            enable_validation = true
            validation_layers = ["VK_LAYER_LUNARG_standard_validation"]

            [window]
            title = "Sandbox"
        "#;
        let config = AppConfig::parse(ConfigFormat::Toml, text).unwrap();
        assert_eq!(config.window.title, "Sandbox");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.enable_validation, Some(true));
        assert_eq!(config.validation_layers, vec!["VK_LAYER_LUNARG_standard_validation".to_string()]);
        assert_eq!(config.instance, InstanceConfig::default());
    }

    #[test]
    fn test_ron_config() {
        let config = AppConfig::parse(ConfigFormat::Ron, "(log_level: \"debug\", window: (width: 1024))").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::parse(ConfigFormat::Toml, "[window\nwidth = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
