//! Shape definitions decoded from shape files.

mod circle;
mod line;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::device::DeviceShape;
use crate::style::ColorError;
use crate::transform::CanvasTransform;
use thiserror::Error;

/// Stroke thickness used when a record does not carry one.
pub const DEFAULT_THICKNESS: f64 = 1.0;

/// Discriminator for the four supported shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Triangle,
    Rectangle,
}

impl ShapeKind {
    /// Look up a kind by its `type` tag as written in shape files.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(ShapeKind::Line),
            "circle" => Some(ShapeKind::Circle),
            "triangle" => Some(ShapeKind::Triangle),
            "rectangle" => Some(ShapeKind::Rectangle),
            _ => None,
        }
    }

    /// The `type` tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

/// Errors raised while placing a single shape on the canvas.
///
/// These never abort a render pass: the offending shape is skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid point: {0:?}")]
    InvalidPoint(String),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Negative radius: {0}")]
    NegativeRadius(f64),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Style properties shared by every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Raw `A;R;G;B` color string, resolved at render time.
    pub color: Option<String>,
    /// Fill the interior with the stroke color.
    pub filled: bool,
    /// Stroke thickness in device pixels.
    pub thickness: f64,
}

impl ShapeStyle {
    /// Create a style with the given color and default fill/thickness.
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: None,
            filled: false,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// The kind of this shape.
    fn kind(&self) -> ShapeKind;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Map the shape into device space for the given canvas transform.
    fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError>;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(s) => s.kind(),
            Shape::Circle(s) => s.kind(),
            Shape::Triangle(s) => s.kind(),
            Shape::Rectangle(s) => s.kind(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Triangle(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
        }
    }

    pub fn place(&self, transform: &CanvasTransform) -> Result<DeviceShape, ShapeError> {
        match self {
            Shape::Line(s) => s.place(transform),
            Shape::Circle(s) => s.place(transform),
            Shape::Triangle(s) => s.place(transform),
            Shape::Rectangle(s) => s.place(transform),
        }
    }
}

/// Borrow a raw field, failing if it was absent from the record.
pub(crate) fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ShapeError> {
    field.as_deref().ok_or(ShapeError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in [
            ShapeKind::Line,
            ShapeKind::Circle,
            ShapeKind::Triangle,
            ShapeKind::Rectangle,
        ] {
            assert_eq!(ShapeKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(ShapeKind::from_tag("hexagon"), None);
        assert_eq!(ShapeKind::from_tag("Line"), None);
    }

    #[test]
    fn test_default_style() {
        let style = ShapeStyle::default();
        assert!(style.color.is_none());
        assert!(!style.filled);
        assert!((style.thickness - DEFAULT_THICKNESS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_dispatch() {
        let shape = Shape::Circle(Circle::new("0;0", 10.0));
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert!(shape.style().color.is_none());
    }
}
