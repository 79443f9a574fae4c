//! Configuration system
//!
//! Capacity limits are deliberately runtime configuration rather than
//! compile-time constants so capacity-exceeded behavior can be exercised at
//! small scales in tests.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Format is picked by extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Capacity and diagnostics settings for the entity/collision core.
///
/// The registry and every component pool are allocated once from these
/// limits and never grow past them; hitting a limit is a reported failure,
/// not a reallocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Maximum number of live entities
    pub max_entities: usize,
    /// Maximum live instances per component kind
    pub max_components_per_kind: usize,
    /// Cap on hits collected by a single position-validity check
    pub max_collision_results: usize,
    /// Whether external renderers should draw collider boxes
    pub debug_draw_colliders: bool,
    /// Log level filter for the logging backend
    pub log_level: String,
}

impl WorldConfig {
    /// Create a configuration with the stock capacities
    pub fn new() -> Self {
        Self {
            max_entities: 1000,
            max_components_per_kind: 1000,
            max_collision_results: 16,
            debug_draw_colliders: false,
            log_level: "info".to_string(),
        }
    }

    /// Set the maximum number of live entities
    pub fn with_max_entities(mut self, limit: usize) -> Self {
        self.max_entities = limit;
        self
    }

    /// Set the maximum live instances per component kind
    pub fn with_max_components_per_kind(mut self, limit: usize) -> Self {
        self.max_components_per_kind = limit;
        self
    }

    /// Set the cap on hits collected per validity check
    pub fn with_max_collision_results(mut self, limit: usize) -> Self {
        self.max_collision_results = limit;
        self
    }

    /// Enable or disable the collider debug overlay
    pub fn with_debug_draw(mut self, enabled: bool) -> Self {
        self.debug_draw_colliders = enabled;
        self
    }

    /// Set the log level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entities == 0 {
            return Err("max_entities must be at least 1".to_string());
        }
        if self.max_components_per_kind == 0 {
            return Err("max_components_per_kind must be at least 1".to_string());
        }
        if self.max_collision_results == 0 {
            return Err("max_collision_results must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for WorldConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_capacities() {
        let config = WorldConfig::default();

        assert_eq!(config.max_entities, 1000);
        assert_eq!(config.max_components_per_kind, 1000);
        assert_eq!(config.max_collision_results, 16);
        assert!(!config.debug_draw_colliders);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = WorldConfig::new()
            .with_max_entities(8)
            .with_max_components_per_kind(4)
            .with_max_collision_results(2)
            .with_debug_draw(true)
            .with_log_level("debug");

        assert_eq!(config.max_entities, 8);
        assert_eq!(config.max_components_per_kind, 4);
        assert_eq!(config.max_collision_results, 2);
        assert!(config.debug_draw_colliders);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(WorldConfig::new().with_max_entities(0).validate().is_err());
        assert!(WorldConfig::new()
            .with_max_components_per_kind(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = WorldConfig::new().with_max_entities(32);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: WorldConfig = toml::from_str(&text).unwrap();

        assert_eq!(back.max_entities, 32);
        assert_eq!(back.max_components_per_kind, config.max_components_per_kind);
    }
}
