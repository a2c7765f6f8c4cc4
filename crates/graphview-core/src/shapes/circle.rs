//! Circle shape.

use super::{ShapeError, ShapeKind, ShapeStyle, ShapeTrait, required};
use crate::device::{DeviceGeometry, DeviceShape};
use crate::style::ResolvedStyle;
use crate::transform::{CanvasTransform, clamp_to, parse_point};
use kurbo::Rect;

/// A circle around a logical center point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    /// Center point (`x;y`).
    pub center: Option<String>,
    /// Radius in logical units.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: impl Into<String>, radius: f64) -> Self {
        Self {
            center: Some(center.into()),
            radius,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError> {
        let center = parse_point(required(&self.center, "center")?)?;
        if !self.radius.is_finite() {
            return Err(ShapeError::InvalidNumber(self.radius.to_string()));
        }
        if self.radius < 0.0 {
            return Err(ShapeError::NegativeRadius(self.radius));
        }
        let style = ResolvedStyle::resolve(&self.style, true)?;

        let canvas = transform.canvas();
        let mut radius = transform.scale_length(self.radius);
        let mut diameter = radius * 2.0;

        // Oversized circles shrink to fit instead of being clipped.
        if diameter > canvas.width || diameter > canvas.height {
            diameter = canvas.width.min(canvas.height);
            radius = diameter / 2.0;
        }

        let center = transform.to_device_unclamped(center);
        let left = clamp_to(center.x - radius, canvas.width - diameter);
        let top = clamp_to(center.y - radius, canvas.height - diameter);

        let bounds = Rect::from_origin_size((left, top), (diameter, diameter));
        Ok(DeviceShape::new(ShapeKind::Circle, DeviceGeometry::Ellipse(bounds), style))
    }
}
