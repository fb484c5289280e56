//! # Graphics Configuration
//!
//! Settings consumed when an [`OpenGl`](crate::render::OpenGl) context wrapper
//! is created. Every mesh created through that wrapper inherits the profile
//! and mesh defaults stored here.
//!
//! Configuration can be kept in TOML or RON:
//!
//! ```toml
//! profile = "Embedded"
//! dynamic_meshes = false
//! default_primitive = "TriangleStrip"
//! log_level = "debug"
//! ```

use serde::{Deserialize, Serialize};

use crate::render::{GlProfile, PrimitiveType};

pub use crate::config::{Config, ConfigError};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// # Graphics Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Which GL flavour the context was created for
    pub profile: GlProfile,
    /// Whether new meshes upload with `DYNAMIC_DRAW` (true) or `STATIC_DRAW`
    pub dynamic_meshes: bool,
    /// Topology assigned to meshes before `set_primitive_type` is called
    pub default_primitive: PrimitiveType,
    /// Log filter passed to `env_logger`
    pub log_level: String,
}

impl GraphicsConfig {
    /// Create a new graphics configuration with defaults
    pub fn new() -> Self {
        Self {
            profile: GlProfile::Desktop,
            dynamic_meshes: true,
            default_primitive: PrimitiveType::TriangleList,
            log_level: "info".to_string(),
        }
    }

    /// Set the GL profile
    #[must_use]
    pub fn with_profile(mut self, profile: GlProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the default mesh mutability
    #[must_use]
    pub fn with_dynamic_meshes(mut self, dynamic: bool) -> Self {
        self.dynamic_meshes = dynamic;
        self
    }

    /// Set the default primitive topology
    #[must_use]
    pub fn with_default_primitive(mut self, primitive: PrimitiveType) -> Self {
        self.default_primitive = primitive;
        self
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}', expected one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }
        Ok(())
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for GraphicsConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_defaults() {
        let config = GraphicsConfig::default();
        assert_eq!(config.profile, GlProfile::Desktop);
        assert!(config.dynamic_meshes);
        assert_eq!(config.default_primitive, PrimitiveType::TriangleList);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GraphicsConfig::new()
            .with_profile(GlProfile::Embedded)
            .with_dynamic_meshes(false)
            .with_default_primitive(PrimitiveType::LineStrip)
            .with_log_level("DEBUG");

        assert_eq!(config.profile, GlProfile::Embedded);
        assert!(!config.dynamic_meshes);
        assert_eq!(config.default_primitive, PrimitiveType::LineStrip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = GraphicsConfig::new().with_log_level("loud");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GraphicsConfig::from_str_with_format(
            "profile = \"Embedded\"\ndefault_primitive = \"PointList\"\n",
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.profile, GlProfile::Embedded);
        assert_eq!(config.default_primitive, PrimitiveType::PointList);
        assert!(config.dynamic_meshes);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_ron_text() {
        let config = GraphicsConfig::from_str_with_format(
            "(profile: Embedded, dynamic_meshes: false)",
            ConfigFormat::Ron,
        )
        .unwrap();

        assert_eq!(config.profile, GlProfile::Embedded);
        assert!(!config.dynamic_meshes);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("graphics_config_{}.toml", std::process::id()));
        let config = GraphicsConfig::new()
            .with_profile(GlProfile::Embedded)
            .with_default_primitive(PrimitiveType::TriangleFan);

        config.save_to_file(&path).unwrap();
        let loaded = GraphicsConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GraphicsConfig::load_from_file("/definitely/not/here/graphics.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
