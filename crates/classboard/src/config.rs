//! Application configuration loaded from TOML.
//!
//! ```toml
//! [import]
//! canvas_width = 800
//! canvas_height = 600
//! seed = 42
//! use_diagram_geometry = true
//!
//! [export]
//! include_operations = false
//! ```

use serde::Deserialize;

use classboard_core::geometry::Size;
use classboard_parser::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DecodeOptions};

use crate::export::ExportOptions;

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Import configuration section
    #[serde(default)]
    pub import: ImportConfig,

    /// Export configuration section
    #[serde(default)]
    pub export: ExportConfig,
}

/// Import configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Width of the area imported classes are scattered over
    canvas_width: f32,

    /// Height of the area imported classes are scattered over
    canvas_height: f32,

    /// Seed for reproducible placement; random when absent
    seed: Option<u64>,

    /// Reuse positions stored in diagram geometry
    use_diagram_geometry: bool,
}

impl ImportConfig {
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Overrides the configured seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Get the decoder options for this configuration.
    ///
    /// Non-positive or non-finite canvas sizes fall back to the defaults.
    pub fn decode_options(&self) -> DecodeOptions {
        let width = positive_or(self.canvas_width, DEFAULT_CANVAS_WIDTH);
        let height = positive_or(self.canvas_height, DEFAULT_CANVAS_HEIGHT);
        DecodeOptions::default()
            .with_canvas(Size::new(width, height))
            .with_diagram_geometry(self.use_diagram_geometry)
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            seed: None,
            use_diagram_geometry: true,
        }
    }
}

/// Export configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Write class methods as `UML:Operation` elements
    include_operations: bool,
}

impl ExportConfig {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::default().with_operations(self.include_operations)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_operations: true,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
