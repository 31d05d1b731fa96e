//! Display configuration and TOML loading

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for drawing digits
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Factor applied to every path data parameter
    pub scale: f64,

    /// Animation speed passed to the surface (0 draws instantly)
    pub speed: u8,

    /// Horizontal gap between consecutive glyphs
    pub margin: f64,

    /// File extension of glyph files in the font directory
    pub extension: String,

    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            speed: 0,
            margin: 10.0,
            extension: "svg".to_string(),
            svg: SvgConfig::default(),
        }
    }
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    scale: Option<f64>,
    speed: Option<u8>,
    margin: Option<f64>,
    extension: Option<String>,
    svg: Option<TomlSvg>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSvg {
    viewbox_padding: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    segment_duration: Option<f64>,
    pretty_print: Option<bool>,
}

impl DisplayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::default().merge_file(path)
    }

    /// Load a configuration from a TOML string
    ///
    /// Keys that are absent keep their default value.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::default().merge_toml(content)
    }

    /// Override this configuration with the keys present in a TOML file
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        self.merge_toml(&content)
    }

    /// Override this configuration with the keys present in a TOML string
    pub fn merge_toml(self, content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = self;

        if let Some(scale) = parsed.scale {
            config.scale = scale;
        }
        if let Some(speed) = parsed.speed {
            config.speed = speed;
        }
        if let Some(margin) = parsed.margin {
            config.margin = margin;
        }
        if let Some(extension) = parsed.extension {
            config.extension = extension;
        }
        if let Some(svg) = parsed.svg {
            let mut out = config.svg;
            if let Some(padding) = svg.viewbox_padding {
                out = out.with_viewbox_padding(padding);
            }
            if let Some(stroke) = svg.stroke {
                out = out.with_stroke(stroke);
            }
            if let Some(width) = svg.stroke_width {
                out = out.with_stroke_width(width);
            }
            if let Some(duration) = svg.segment_duration {
                out = out.with_segment_duration(duration);
            }
            if let Some(pretty) = svg.pretty_print {
                out = out.with_pretty_print(pretty);
            }
            config.svg = out;
        }

        Ok(config)
    }

    /// Set the path data scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the animation speed
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    /// Set the gap between glyphs
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the glyph file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.speed, 0);
        assert_eq!(config.margin, 10.0);
        assert_eq!(config.extension, "svg");
    }

    #[test]
    fn test_builder_pattern() {
        let config = DisplayConfig::new()
            .with_scale(5.0)
            .with_speed(3)
            .with_margin(4.0)
            .with_extension("xml");

        assert_eq!(config.scale, 5.0);
        assert_eq!(config.speed, 3);
        assert_eq!(config.margin, 4.0);
        assert_eq!(config.extension, "xml");
    }

    #[test]
    fn test_merge_toml_keeps_base_values() {
        let base = DisplayConfig::default().with_scale(5.0).with_speed(4);
        let config = base.merge_toml("margin = 2.0").unwrap();
        assert_eq!(config.scale, 5.0);
        assert_eq!(config.speed, 4);
        assert_eq!(config.margin, 2.0);

        let config = DisplayConfig::default()
            .with_scale(5.0)
            .merge_toml("scale = 3.0")
            .unwrap();
        assert_eq!(config.scale, 3.0);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = DisplayConfig::from_toml(
            r##"
scale = 5.0
speed = 2

[svg]
stroke = "#00ff00"
"##,
        )
        .unwrap();

        assert_eq!(config.scale, 5.0);
        assert_eq!(config.speed, 2);
        assert_eq!(config.margin, 10.0);
        assert_eq!(config.svg.stroke, "#00ff00");
        assert_eq!(config.svg.stroke_width, SvgConfig::default().stroke_width);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(DisplayConfig::from_toml("").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let result = DisplayConfig::from_toml("colour = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = DisplayConfig::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
