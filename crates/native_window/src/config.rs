//! Configuration files
//!
//! [`Config`] gives any serde type TOML/RON load and save, chosen by file
//! extension. [`WindowConfig`] is the file form of a window plus its optional
//! icon and cursor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{WindowError, WindowResult};
use crate::geometry::{Point, Size};
use crate::native::{WindowFlags, WINDOWPOS_CENTERED};
use crate::window::WindowDescriptor;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

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
}

/// Where to place a new window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PositionConfig {
    /// Centre on the display
    #[default]
    Centered,
    /// Explicit top-left corner
    At {
        /// Horizontal coordinate
        x: i32,
        /// Vertical coordinate
        y: i32,
    },
}

/// Cursor image and hotspot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Image file
    pub path: PathBuf,
    /// Hotspot column
    #[serde(default)]
    pub hotspot_x: i32,
    /// Hotspot row
    #[serde(default)]
    pub hotspot_y: i32,
}

/// File form of a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Placement
    pub position: PositionConfig,
    /// Client area width
    pub width: i32,
    /// Client area height
    pub height: i32,
    /// Flag names, e.g. `["shown", "resizable"]`
    pub flags: Vec<String>,
    /// Icon image file
    pub icon: Option<PathBuf>,
    /// Cursor image and hotspot
    pub cursor: Option<CursorConfig>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            position: PositionConfig::Centered,
            width: 640,
            height: 480,
            flags: vec!["shown".to_string()],
            icon: None,
            cursor: None,
        }
    }
}

impl Config for WindowConfig {}

impl WindowConfig {
    /// Flags parsed from their names
    pub fn window_flags(&self) -> WindowResult<WindowFlags> {
        self.flags.iter().try_fold(WindowFlags::empty(), |acc, name| {
            WindowFlags::from_name(name)
                .map(|flag| acc | flag)
                .ok_or_else(|| WindowError::InvalidArgument(format!("unknown window flag \"{name}\"")))
        })
    }

    /// Validate and convert into creation parameters
    pub fn to_descriptor(&self) -> WindowResult<WindowDescriptor> {
        let size = Size::new(self.width, self.height);
        if !size.is_positive() {
            return Err(WindowError::InvalidArgument(format!("window size {size} must be positive")));
        }
        let position = match self.position {
            PositionConfig::Centered => Point::new(WINDOWPOS_CENTERED, WINDOWPOS_CENTERED),
            PositionConfig::At { x, y } => Point::new(x, y),
        };
        Ok(WindowDescriptor::new(self.title.clone())
            .with_position(position)
            .with_size(size)
            .with_flags(self.window_flags()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let text = r#"
            title = "Demo"
            width = 800
            height = 600
            flags = ["shown", "resizable", "always-on-top"]
            icon = "assets/icon.png"

            [position.at]
            x = 10
            y = 20

            [cursor]
            path = "assets/cursor.png"
            hotspot_x = 4
        "#;
        let config: WindowConfig = toml::from_str(text).unwrap();
        let desc = config.to_descriptor().unwrap();
        assert_eq!(desc.title, "Demo");
        assert_eq!(desc.position, Point::new(10, 20));
        assert_eq!(desc.size, Size::new(800, 600));
        assert_eq!(
            desc.flags,
            WindowFlags::SHOWN | WindowFlags::RESIZABLE | WindowFlags::ALWAYS_ON_TOP
        );
        assert_eq!(config.icon, Some(PathBuf::from("assets/icon.png")));
        let cursor = config.cursor.unwrap();
        assert_eq!((cursor.hotspot_x, cursor.hotspot_y), (4, 0));
    }

    #[test]
    fn test_defaults_are_centered() {
        let config: WindowConfig = toml::from_str("title = \"Only a title\"").unwrap();
        let desc = config.to_descriptor().unwrap();
        assert_eq!(desc.position, WindowDescriptor::CENTERED);
        assert_eq!(desc.size, Size::new(640, 480));
        assert_eq!(desc.flags, WindowFlags::SHOWN);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = WindowConfig {
            flags: vec!["sparkly".to_string()],
            ..WindowConfig::default()
        };
        assert!(matches!(config.to_descriptor(), Err(WindowError::InvalidArgument(_))));

        config.flags.clear();
        config.width = 0;
        assert!(matches!(config.to_descriptor(), Err(WindowError::InvalidArgument(_))));
    }

    #[test]
    fn test_ron_save_and_load() {
        let path = std::env::temp_dir().join(format!("native_window_config_{}.ron", std::process::id()));
        let path = path.to_str().unwrap();
        let config = WindowConfig {
            title: "Saved".to_string(),
            position: PositionConfig::At { x: -5, y: 7 },
            ..WindowConfig::default()
        };
        config.save_to_file(path).unwrap();
        let loaded = WindowConfig::load_from_file(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = WindowConfig::default().save_to_file("window.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
