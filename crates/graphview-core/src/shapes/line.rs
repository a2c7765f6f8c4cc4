//! Line shape.

use super::{ShapeError, ShapeKind, ShapeStyle, ShapeTrait, required};
use crate::device::{DeviceGeometry, DeviceShape};
use crate::style::ResolvedStyle;
use crate::transform::{CanvasTransform, parse_point};
use kurbo::Line as KurboLine;

/// A straight segment between two logical points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Start point (`x;y`).
    pub a: Option<String>,
    /// End point (`x;y`).
    pub b: Option<String>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: Some(a.into()),
            b: Some(b.into()),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError> {
        let a = parse_point(required(&self.a, "a")?)?;
        let b = parse_point(required(&self.b, "b")?)?;
        let style = ResolvedStyle::resolve(&self.style, false)?;

        let segment = KurboLine::new(transform.to_device(a), transform.to_device(b));
        Ok(DeviceShape::new(ShapeKind::Line, DeviceGeometry::Line(segment), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(Size::new(800.0, 600.0), 1.0)
    }

    #[test]
    fn test_line_placement() {
        let line = Line::new("10;20", "30;40").with_style(ShapeStyle::with_color("255;255;0;0"));
        let placed = line.place(&transform()).unwrap();
        let DeviceGeometry::Line(segment) = placed.geometry else {
            panic!("expected a line");
        };
        assert!((segment.p0.x - 410.0).abs() < f64::EPSILON);
        assert!((segment.p0.y - 280.0).abs() < f64::EPSILON);
        assert!((segment.p1.x - 430.0).abs() < f64::EPSILON);
        assert!((segment.p1.y - 260.0).abs() < f64::EPSILON);
        assert!((placed.stroke_width - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filled_line_has_no_fill() {
        let mut style = ShapeStyle::with_color("255;255;0;0");
        style.filled = true;
        let placed = Line::new("0;0", "1;1").with_style(style).place(&transform()).unwrap();
        assert_eq!(placed.fill, None);
    }

    #[test]
    fn test_endpoint_clamped() {
        let line = Line::new("-5000;0", "0;5000").with_style(ShapeStyle::with_color("255;0;0;0"));
        let placed = line.place(&transform()).unwrap();
        let DeviceGeometry::Line(segment) = placed.geometry else {
            panic!("expected a line");
        };
        assert!(segment.p0.x.abs() < f64::EPSILON);
        assert!(segment.p1.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_point() {
        let line = Line::new("10", "30;40").with_style(ShapeStyle::with_color("255;0;0;0"));
        assert!(matches!(line.place(&transform()), Err(ShapeError::InvalidPoint(_))));
    }

    #[test]
    fn test_missing_endpoint() {
        let line = Line {
            a: Some("0;0".into()),
            b: None,
            style: ShapeStyle::with_color("255;0;0;0"),
        };
        assert_eq!(line.place(&transform()), Err(ShapeError::MissingField("b")));
    }
}
