//! Color resolution for the `A;R;G;B` color strings found in shape files.

use crate::shapes::{ShapeError, ShapeStyle, required};
use peniko::Color;
use thiserror::Error;

/// Color string errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {0:?} (expected A;R;G;B)")]
    InvalidColorFormat(String),
}

/// Parse an `A;R;G;B` string into a straight-alpha sRGB color.
///
/// The string must split into exactly four tokens, each a `u8`. Whitespace
/// around a token is ignored.
pub fn resolve_color(value: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(value.to_string());

    let channels = value
        .split(';')
        .map(|token| token.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<u8>, _>>()?;

    match channels.as_slice() {
        &[a, r, g, b] => Ok(Color::from_rgba8(r, g, b, a)),
        _ => Err(invalid()),
    }
}

/// Stroke and fill resolved from a [`ShapeStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

impl ResolvedStyle {
    /// Resolve a shape style. `fillable` is false for open shapes (lines),
    /// which never receive a fill.
    pub fn resolve(style: &ShapeStyle, fillable: bool) -> Result<Self, ShapeError> {
        let stroke = resolve_color(required(&style.color, "color")?)?;
        Ok(Self {
            stroke,
            stroke_width: style.thickness,
            fill: (fillable && style.filled).then_some(stroke),
        })
    }
}
