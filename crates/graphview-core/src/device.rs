//! Device-space drawing primitives handed to viewports.

use crate::shapes::ShapeKind;
use crate::style::ResolvedStyle;
use kurbo::{Line, Point, Rect};
use peniko::Color;

/// Geometry of a placed shape, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceGeometry {
    /// Straight segment between two clamped endpoints.
    Line(Line),
    /// Circle inscribed in a square box.
    Ellipse(Rect),
    /// Closed polygon through three clamped vertices.
    Triangle([Point; 3]),
    /// Axis-aligned box.
    Rect(Rect),
}

/// A shape ready to paint: geometry plus resolved stroke and fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceShape {
    pub kind: ShapeKind,
    pub geometry: DeviceGeometry,
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

impl DeviceShape {
    pub fn new(kind: ShapeKind, geometry: DeviceGeometry, style: ResolvedStyle) -> Self {
        Self {
            kind,
            geometry,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
            fill: style.fill,
        }
    }
}
