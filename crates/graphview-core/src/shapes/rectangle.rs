//! Rectangle shape.

use super::{ShapeError, ShapeKind, ShapeStyle, ShapeTrait, required};
use crate::device::{DeviceGeometry, DeviceShape};
use crate::style::ResolvedStyle;
use crate::transform::{CanvasTransform, parse_point};
use kurbo::Rect;

/// An axis-aligned rectangle given by two opposite logical corners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rectangle {
    /// Top-left corner (`x;y`).
    pub top_left: Option<String>,
    /// Bottom-right corner (`x;y`).
    pub bottom_right: Option<String>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(top_left: impl Into<String>, bottom_right: impl Into<String>) -> Self {
        Self {
            top_left: Some(top_left.into()),
            bottom_right: Some(bottom_right.into()),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError> {
        let top_left = parse_point(required(&self.top_left, "topleft")?)?;
        let bottom_right = parse_point(required(&self.bottom_right, "bottomright")?)?;
        let style = ResolvedStyle::resolve(&self.style, true)?;

        // The box is rebuilt from the clamped corners, so corners given in
        // any order still produce a normalized rectangle.
        let p0 = transform.to_device(top_left);
        let p1 = transform.to_device(bottom_right);
        let bounds = Rect::from_origin_size(
            (p0.x.min(p1.x), p0.y.min(p1.y)),
            ((p1.x - p0.x).abs(), (p1.y - p0.y).abs()),
        );
        Ok(DeviceShape::new(ShapeKind::Rectangle, DeviceGeometry::Rect(bounds), style))
    }
}
