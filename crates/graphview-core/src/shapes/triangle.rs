//! Triangle shape.

use super::{ShapeError, ShapeKind, ShapeStyle, ShapeTrait, required};
use crate::device::{DeviceGeometry, DeviceShape};
use crate::style::ResolvedStyle;
use crate::transform::{CanvasTransform, parse_point};

/// A triangle through three logical points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangle {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>) -> Self {
        Self {
            a: Some(a.into()),
            b: Some(b.into()),
            c: Some(c.into()),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError> {
        let a = parse_point(required(&self.a, "a")?)?;
        let b = parse_point(required(&self.b, "b")?)?;
        let c = parse_point(required(&self.c, "c")?)?;
        let style = ResolvedStyle::resolve(&self.style, true)?;

        // Vertices clamp independently, which can distort partly hidden triangles.
        let vertices = [a, b, c].map(|p| transform.to_device(p));
        Ok(DeviceShape::new(ShapeKind::Triangle, DeviceGeometry::Triangle(vertices), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(Size::new(200.0, 100.0), 1.0)
    }

    #[test]
    fn test_triangle_placement() {
        let mut style = ShapeStyle::with_color("255;0;0;255");
        style.filled = true;
        let triangle = Triangle::new("0;0", "50;0", "0;25").with_style(style);
        let placed = triangle.place(&transform()).unwrap();
        let DeviceGeometry::Triangle([a, b, c]) = placed.geometry else {
            panic!("expected a triangle");
        };
        assert!((a.x - 100.0).abs() < f64::EPSILON && (a.y - 50.0).abs() < f64::EPSILON);
        assert!((b.x - 150.0).abs() < f64::EPSILON && (b.y - 50.0).abs() < f64::EPSILON);
        assert!((c.x - 100.0).abs() < f64::EPSILON && (c.y - 25.0).abs() < f64::EPSILON);
        assert_eq!(placed.fill, Some(placed.stroke));
    }

    #[test]
    fn test_vertices_clamped_independently() {
        let triangle = Triangle::new("-1000;0", "0;1000", "1000;-1000")
            .with_style(ShapeStyle::with_color("255;0;0;0"));
        let placed = triangle.place(&transform()).unwrap();
        let DeviceGeometry::Triangle([a, b, c]) = placed.geometry else {
            panic!("expected a triangle");
        };
        assert!(a.x.abs() < f64::EPSILON && (a.y - 50.0).abs() < f64::EPSILON);
        assert!((b.x - 100.0).abs() < f64::EPSILON && b.y.abs() < f64::EPSILON);
        assert!((c.x - 200.0).abs() < f64::EPSILON && (c.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_vertex() {
        let triangle = Triangle {
            c: None,
            ..Triangle::new("0;0", "1;1", "2;2")
        }
        .with_style(ShapeStyle::with_color("255;0;0;0"));
        assert_eq!(triangle.place(&transform()), Err(ShapeError::MissingField("c")));
    }

    #[test]
    fn test_bad_color() {
        let triangle = Triangle::new("0;0", "1;1", "2;2").with_style(ShapeStyle::with_color("red"));
        assert!(matches!(triangle.place(&transform()), Err(ShapeError::Color(_))));
    }
}
