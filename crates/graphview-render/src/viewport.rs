//! Viewport trait abstraction.

use graphview_core::DeviceShape;
use kurbo::Size;

/// Trait for rendering sinks.
///
/// A render pass calls [`Viewport::clear`], then [`Viewport::draw`] once per
/// placed shape, then [`Viewport::present`].
pub trait Viewport {
    /// Drop every primitive from the previous pass.
    fn clear(&mut self);

    /// Add one primitive to the current pass.
    fn draw(&mut self, shape: &DeviceShape);

    /// Finish the pass for a canvas of the given size.
    fn present(&mut self, _canvas: Size) {}
}

/// Viewport that keeps the primitives of the last pass in memory.
#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    primitives: Vec<DeviceShape>,
    canvas: Size,
    frames: usize,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives drawn in the last pass.
    pub fn primitives(&self) -> &[DeviceShape] {
        &self.primitives
    }

    /// Canvas size of the last presented pass.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Number of presented passes.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Viewport for SceneRecorder {
    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn draw(&mut self, shape: &DeviceShape) {
        self.primitives.push(*shape);
    }

    fn present(&mut self, canvas: Size) {
        self.canvas = canvas;
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphview_core::shapes::{Line, ShapeStyle, ShapeTrait};
    use graphview_core::CanvasTransform;

    #[test]
    fn test_recorder_clears_between_passes() {
        let placed = Line::new("0;0", "1;1")
            .with_style(ShapeStyle::with_color("255;0;0;0"))
            .place(&CanvasTransform::new(Size::new(10.0, 10.0), 1.0))
            .unwrap();

        let mut recorder = SceneRecorder::new();
        recorder.clear();
        recorder.draw(&placed);
        recorder.draw(&placed);
        recorder.present(Size::new(10.0, 10.0));
        assert_eq!(recorder.primitives().len(), 2);

        recorder.clear();
        recorder.draw(&placed);
        recorder.present(Size::new(10.0, 10.0));
        assert_eq!(recorder.primitives().len(), 1);
        assert_eq!(recorder.frames(), 2);
    }
}
