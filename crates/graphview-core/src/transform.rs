//! Logical-to-device coordinate mapping.
//!
//! Shape files use a logical space centered on the canvas with Y pointing up.
//! Devices use pixels with the origin at the top-left and Y pointing down.

use crate::device::DeviceShape;
use crate::shapes::{Shape, ShapeError};
use kurbo::{Affine, Point, Size};

/// Maps logical points onto a canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    canvas: Size,
    scale: f64,
}

impl CanvasTransform {
    /// Create a transform for a canvas and a precomputed scale.
    pub fn new(canvas: Size, scale: f64) -> Self {
        Self { canvas, scale }
    }

    /// Fit the reference viewport into the canvas, preserving proportions.
    ///
    /// Returns `None` when either size has a zero, negative or non-finite
    /// dimension.
    pub fn fit(canvas: Size, reference: Size) -> Option<Self> {
        if is_degenerate(canvas) || is_degenerate(reference) {
            return None;
        }
        Some(Self::new(canvas, fit_scale(canvas, reference)))
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the affine transform from logical to device coordinates.
    pub fn affine(&self) -> Affine {
        Affine::new([
            self.scale,
            0.0,
            0.0,
            -self.scale,
            self.canvas.width / 2.0,
            self.canvas.height / 2.0,
        ])
    }

    /// Map a logical point to device space without clamping.
    pub fn to_device_unclamped(&self, point: Point) -> Point {
        self.affine() * point
    }

    /// Map a logical point to device space, clamping each axis to the canvas.
    pub fn to_device(&self, point: Point) -> Point {
        let p = self.to_device_unclamped(point);
        Point::new(
            clamp_to(p.x, self.canvas.width),
            clamp_to(p.y, self.canvas.height),
        )
    }

    /// Scale a logical length to device pixels.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

/// Uniform scale that fits `reference` into `canvas`.
pub fn fit_scale(canvas: Size, reference: Size) -> f64 {
    let scale_x = canvas.width / reference.width;
    let scale_y = canvas.height / reference.height;
    scale_x.min(scale_y)
}

/// True when a size cannot be rendered into.
pub fn is_degenerate(size: Size) -> bool {
    !(size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0)
}

/// Clamp `value` into `[0, max]`. Never panics, even if `max < 0`.
pub fn clamp_to(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Parse a finite real number.
pub fn parse_number(value: &str) -> Result<f64, ShapeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ShapeError::InvalidNumber(value.to_string()))
}

/// Parse an `x;y` point string.
pub fn parse_point(value: &str) -> Result<Point, ShapeError> {
    let mut tokens = value.split(';');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => {
            let invalid = |_| ShapeError::InvalidPoint(value.to_string());
            Ok(Point::new(
                parse_number(x).map_err(invalid)?,
                parse_number(y).map_err(invalid)?,
            ))
        }
        _ => Err(ShapeError::InvalidPoint(value.to_string())),
    }
}

/// Place a single shape on a canvas of `canvas` size at the given `scale`.
pub fn place(shape: &Shape, canvas: Size, scale: f64) -> Result<DeviceShape, ShapeError> {
    shape.place(&CanvasTransform::new(canvas, scale))
}
