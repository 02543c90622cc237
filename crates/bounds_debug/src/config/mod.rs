//! Configuration system

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec4;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;
        
        // Try different formats
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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
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
    
    /// A value is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for bounding-box debug outlines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsDebugConfig {
    /// Frames an outline stays visible before it returns to the pool
    pub frame_count: u32,
    /// Line thickness in pixels
    pub line_width: f32,
    /// Name given to every created line set
    pub line_name: String,
    /// Color used when a caller does not supply one (RGBA)
    pub default_color: Vec4,
    /// Number of outlines that can be visible at once
    pub pool_capacity: usize,
    /// Master enable flag
    pub enabled: bool,
}

impl Default for BoundsDebugConfig {
    fn default() -> Self {
        Self {
            frame_count: 10,
            line_width: 5.0,
            line_name: "BoundingBoxLines".to_string(),
            default_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            pool_capacity: 32,
            enabled: true,
        }
    }
}

impl Config for BoundsDebugConfig {}

impl BoundsDebugConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::Invalid("frame_count must be at least 1".to_string()));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "line_width must be a positive number, got {}",
                self.line_width
            )));
        }
        if self.pool_capacity == 0 {
            return Err(ConfigError::Invalid("pool_capacity must be at least 1".to_string()));
        }
        Ok(())
    }
    
    /// Builder pattern: Set frame count
    pub fn with_frame_count(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count;
        self
    }
    
    /// Builder pattern: Set pool capacity
    pub fn with_pool_capacity(mut self, pool_capacity: usize) -> Self {
        self.pool_capacity = pool_capacity;
        self
    }
    
    /// Builder pattern: Set default color
    pub fn with_default_color(mut self, color: Vec4) -> Self {
        self.default_color = color;
        self
    }
}
