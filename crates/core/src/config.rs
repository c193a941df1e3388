//! Configuration for layout, canvas size and drawing style.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Top-level configuration, usually read from `edgeviz.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VisualizerConfig {
    /// Force-directed layout parameters.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Output surface size.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Node and edge drawing style.
    #[serde(default)]
    pub style: StyleConfig,
}

impl VisualizerConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`VisualizerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or fails validation.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.canvas.validate()?;
        self.style.validate()
    }
}

/// Force-directed layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Seed for initial and fallback random positions.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Simulation steps for the force-directed layout.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Spring stiffness along edges (0.0 - 1.0).
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,

    /// Ideal edge length in layout units.
    #[serde(default = "default_rest_length")]
    pub rest_length: f64,

    /// Strength of the pairwise node repulsion.
    #[serde(default = "default_repulsion")]
    pub repulsion: f64,

    /// Pull toward the layout center (0.0 - 1.0).
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            iterations: default_iterations(),
            stiffness: default_stiffness(),
            rest_length: default_rest_length(),
            repulsion: default_repulsion(),
            gravity: default_gravity(),
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid_config("layout.iterations must be greater than 0"));
        }
        unit_interval("layout.stiffness", self.stiffness)?;
        unit_interval("layout.gravity", self.gravity)?;
        positive("layout.rest_length", self.rest_length)?;
        if !self.repulsion.is_finite() || self.repulsion < 0.0 {
            return Err(Error::invalid_config(format!(
                "layout.repulsion must be non-negative and finite, got: {}",
                self.repulsion
            )));
        }
        Ok(())
    }
}

/// Output surface size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Blank border kept around the drawing.
    #[serde(default = "default_margin")]
    pub margin: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
        }
    }
}

impl CanvasConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_config(format!(
                "canvas size must be positive, got: {}x{}",
                self.width, self.height
            )));
        }
        // The title takes a second margin above the plot.
        if self.margin.saturating_mul(2) >= self.width
            || self.margin.saturating_mul(3) >= self.height
        {
            return Err(Error::invalid_config(format!(
                "canvas.margin {} leaves no room on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Node and edge drawing style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_node_radius")]
    pub node_radius: f32,

    /// Radius of nodes on a highlighted shortest path.
    #[serde(default = "default_highlight_node_radius")]
    pub highlight_node_radius: f32,

    #[serde(default = "default_edge_width")]
    pub edge_width: f32,

    #[serde(default = "default_highlight_width")]
    pub highlight_width: f32,

    #[serde(default = "default_node_font_size")]
    pub node_font_size: f32,

    #[serde(default = "default_edge_font_size")]
    pub edge_font_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_radius: default_node_radius(),
            highlight_node_radius: default_highlight_node_radius(),
            edge_width: default_edge_width(),
            highlight_width: default_highlight_width(),
            node_font_size: default_node_font_size(),
            edge_font_size: default_edge_font_size(),
        }
    }
}

impl StyleConfig {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("style.node_radius", self.node_radius),
            ("style.highlight_node_radius", self.highlight_node_radius),
            ("style.edge_width", self.edge_width),
            ("style.highlight_width", self.highlight_width),
            ("style.node_font_size", self.node_font_size),
            ("style.edge_font_size", self.edge_font_size),
        ];
        for (name, value) in fields {
            positive(name, f64::from(value))?;
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_config(format!(
            "{name} must be positive and finite, got: {value}"
        )));
    }
    Ok(())
}

fn unit_interval(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_config(format!(
            "{name} must be within 0.0..=1.0, got: {value}"
        )));
    }
    Ok(())
}

const fn default_seed() -> u64 {
    42
}

const fn default_iterations() -> usize {
    50
}

const fn default_stiffness() -> f64 {
    0.05
}

const fn default_rest_length() -> f64 {
    1.0
}

const fn default_repulsion() -> f64 {
    0.1
}

const fn default_gravity() -> f64 {
    0.03
}

const fn default_width() -> u32 {
    700
}

const fn default_height() -> u32 {
    600
}

const fn default_margin() -> u32 {
    40
}

const fn default_node_radius() -> f32 {
    12.0
}

const fn default_highlight_node_radius() -> f32 {
    14.0
}

const fn default_edge_width() -> f32 {
    1.0
}

const fn default_highlight_width() -> f32 {
    2.5
}

const fn default_node_font_size() -> f32 {
    10.0
}

const fn default_edge_font_size() -> f32 {
    8.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.seed, 42);
        assert_eq!(config.canvas.width, 700);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = VisualizerConfig::from_toml("[layout]\nseed = 7\n").unwrap();
        assert_eq!(config.layout.seed, 7);
        assert_eq!(config.layout.iterations, 50);
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = VisualizerConfig::from_toml("").unwrap();
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(VisualizerConfig::from_toml("[layout]\niterations = 0\n").is_err());
        assert!(VisualizerConfig::from_toml("[layout]\nstiffness = 1.5\n").is_err());
        assert!(VisualizerConfig::from_toml("[canvas]\nwidth = 0\n").is_err());
        assert!(VisualizerConfig::from_toml("[canvas]\nmargin = 400\n").is_err());
        assert!(VisualizerConfig::from_toml("[style]\nnode_radius = -1.0\n").is_err());
    }

    #[test]
    fn test_malformed_toml_is_invalid_config() {
        let err = VisualizerConfig::from_toml("[layout\nseed = ").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[canvas]\nwidth = 1024\nheight = 768").unwrap();

        let config = VisualizerConfig::load(file.path()).unwrap();
        assert_eq!(config.canvas.width, 1024);
        assert_eq!(config.canvas.height, 768);
    }

    #[test]
    fn test_load_missing_file() {
        let err = VisualizerConfig::load("/nonexistent/edgeviz.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigReadFailed { .. }));
    }
}
