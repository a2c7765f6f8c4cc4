//! Viewer configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the reference viewport size (`WxH`).
pub const REFERENCE_ENV: &str = "GRAPHVIEW_REFERENCE";

/// Environment variable overriding the initial canvas size (`WxH`).
pub const CANVAS_ENV: &str = "GRAPHVIEW_SIZE";

/// Default reference viewport, standing in for the primary display size.
pub const DEFAULT_REFERENCE_SIZE: Size = Size::new(1920.0, 1080.0);

/// Settings fixed for the lifetime of a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Design-time viewport that logical coordinates are authored against.
    pub reference_size: Size,
    /// Initial canvas size, before the first resize.
    pub canvas_size: Size,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            reference_size: DEFAULT_REFERENCE_SIZE,
            canvas_size: DEFAULT_REFERENCE_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a configuration from JSON. Missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Apply overrides from [`REFERENCE_ENV`] and [`CANVAS_ENV`].
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(size) = env_size(REFERENCE_ENV) {
            self.reference_size = size;
        }
        if let Some(size) = env_size(CANVAS_ENV) {
            self.canvas_size = size;
        }
        self
    }

    pub fn with_reference_size(mut self, size: Size) -> Self {
        self.reference_size = size;
        self
    }

    pub fn with_canvas_size(mut self, size: Size) -> Self {
        self.canvas_size = size;
        self
    }
}

fn env_size(name: &str) -> Option<Size> {
    let value = std::env::var(name).ok()?;
    let size = parse_size(&value);
    if size.is_none() {
        log::warn!("Ignoring {name}={value:?}: expected WIDTHxHEIGHT");
    }
    size
}

/// Parse a `WIDTHxHEIGHT` string such as `1280x720`.
pub fn parse_size(value: &str) -> Option<Size> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<f64>().ok()?;
    let height = height.trim().parse::<f64>().ok()?;
    Some(Size::new(width, height))
}
