//! GraphView Render Library
//!
//! Render driver and viewport implementations for GraphView.
//! The driver places decoded shapes on the canvas and hands the resulting
//! device-space primitives to a [`Viewport`].

mod driver;
mod svg;
mod viewport;

pub use driver::{DriverState, RenderDriver, RenderError, RenderStats, ViewerCommand};
pub use svg::SvgViewport;
pub use viewport::{SceneRecorder, Viewport};
