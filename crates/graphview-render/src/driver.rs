//! Render driver: owns the loaded shapes and the canvas size, and re-runs
//! the placement pass whenever either changes.

use crate::viewport::Viewport;
use graphview_core::{CanvasTransform, LoadError, Shape, ShapeSource, ViewerConfig};
use kurbo::Size;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Render driver errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot render into a canvas of size {}x{}", .0.width, .0.height)]
    DegenerateCanvas(Size),
    #[error("Invalid reference viewport size {}x{}", .0.width, .0.height)]
    DegenerateReference(Size),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl RenderError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::Load(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Commands sent from the hosting shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    /// Load a new document, replacing the current one.
    OpenFile(PathBuf),
    /// The viewport was resized.
    Resize(Size),
}

/// Whether a document is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Loaded,
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Shapes emitted to the viewport.
    pub drawn: usize,
    /// Shapes skipped because they could not be placed.
    pub skipped: usize,
}

/// Drives decode, placement and emission into a viewport.
pub struct RenderDriver<S, V> {
    source: S,
    viewport: V,
    reference_size: Size,
    canvas_size: Size,
    shapes: Option<Vec<Shape>>,
}

impl<S: ShapeSource, V: Viewport> RenderDriver<S, V> {
    /// Create an idle driver.
    pub fn new(source: S, viewport: V, config: &ViewerConfig) -> Self {
        Self {
            source,
            viewport,
            reference_size: config.reference_size,
            canvas_size: config.canvas_size,
            shapes: None,
        }
    }

    pub fn state(&self) -> DriverState {
        if self.shapes.is_some() {
            DriverState::Loaded
        } else {
            DriverState::Idle
        }
    }

    /// Shapes of the loaded document (empty while idle).
    pub fn shapes(&self) -> &[Shape] {
        self.shapes.as_deref().unwrap_or_default()
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn reference_size(&self) -> Size {
        self.reference_size
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Consume the driver, returning its viewport.
    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Load a document and render it.
    ///
    /// On a load failure the previously loaded document stays in place.
    pub fn open_file(&mut self, path: &Path) -> Result<RenderStats, RenderError> {
        let shapes = self.source.read_shapes(path)?;
        self.shapes = Some(shapes);
        self.render()
    }

    /// Record a new canvas size and re-render the loaded document.
    pub fn resize(&mut self, size: Size) -> Result<RenderStats, RenderError> {
        self.canvas_size = size;
        if self.shapes.is_none() {
            return Ok(RenderStats::default());
        }
        self.render()
    }

    /// Run a full render pass over the loaded shapes.
    ///
    /// A degenerate canvas fails before the viewport is touched.
    pub fn render(&mut self) -> Result<RenderStats, RenderError> {
        let transform = self.transform()?;
        let shapes = self.shapes.as_deref().unwrap_or_default();

        self.viewport.clear();
        let mut stats = RenderStats::default();
        for (index, shape) in shapes.iter().enumerate() {
            match shape.place(&transform) {
                Ok(device) => {
                    self.viewport.draw(&device);
                    stats.drawn += 1;
                }
                Err(e) => {
                    log::warn!("Skipping {} #{}: {}", shape.kind().tag(), index, e);
                    stats.skipped += 1;
                }
            }
        }
        self.viewport.present(self.canvas_size);

        log::debug!(
            "Rendered {} shapes ({} skipped) at scale {:.3}",
            stats.drawn,
            stats.skipped,
            transform.scale()
        );
        Ok(stats)
    }

    /// Apply one shell command.
    pub fn handle(&mut self, command: ViewerCommand) -> Result<RenderStats, RenderError> {
        match command {
            ViewerCommand::OpenFile(path) => self.open_file(&path),
            ViewerCommand::Resize(size) => self.resize(size),
        }
    }

    /// Apply every command in order. Failures are logged and do not stop
    /// later commands; the last failure is returned.
    pub fn drain(
        &mut self,
        commands: impl IntoIterator<Item = ViewerCommand>,
    ) -> Result<(), RenderError> {
        let mut last_error = None;
        for command in commands {
            if let Err(e) = self.handle(command) {
                log::error!("{}", e);
                last_error = Some(e);
            }
        }
        match last_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn transform(&self) -> Result<CanvasTransform, RenderError> {
        CanvasTransform::fit(self.canvas_size, self.reference_size).ok_or_else(|| {
            if graphview_core::transform::is_degenerate(self.reference_size) {
                RenderError::DegenerateReference(self.reference_size)
            } else {
                RenderError::DegenerateCanvas(self.canvas_size)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::SceneRecorder;
    use graphview_core::shapes::{Circle, Line, ShapeStyle};
    use graphview_core::DecodeError;
    use std::cell::Cell;

    /// In-memory source that counts reads.
    struct FixedSource {
        shapes: Vec<Shape>,
        reads: Cell<usize>,
    }

    impl FixedSource {
        fn new(shapes: Vec<Shape>) -> Self {
            Self {
                shapes,
                reads: Cell::new(0),
            }
        }
    }

    impl ShapeSource for FixedSource {
        fn read_shapes(&self, path: &Path) -> Result<Vec<Shape>, LoadError> {
            self.reads.set(self.reads.get() + 1);
            if path.extension().is_some_and(|e| e == "bad") {
                return Err(DecodeError::UnsupportedFormat(".bad".into()).into());
            }
            Ok(self.shapes.clone())
        }
    }

    fn config() -> ViewerConfig {
        ViewerConfig::new()
            .with_reference_size(Size::new(800.0, 600.0))
            .with_canvas_size(Size::new(800.0, 600.0))
    }

    fn red(shape: Line) -> Shape {
        Shape::Line(shape.with_style(ShapeStyle::with_color("255;255;0;0")))
    }

    #[test]
    fn test_starts_idle() {
        let driver = RenderDriver::new(FixedSource::new(vec![]), SceneRecorder::new(), &config());
        assert_eq!(driver.state(), DriverState::Idle);
        assert!(driver.shapes().is_empty());
    }

    #[test]
    fn test_open_file_renders() {
        let source = FixedSource::new(vec![red(Line::new("0;0", "10;10"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());

        let stats = driver.open_file(Path::new("a.json")).unwrap();
        assert_eq!(stats, RenderStats { drawn: 1, skipped: 0 });
        assert_eq!(driver.state(), DriverState::Loaded);
        assert_eq!(driver.viewport().primitives().len(), 1);
    }

    #[test]
    fn test_bad_shapes_isolated() {
        let source = FixedSource::new(vec![
            red(Line::new("0;0", "oops")),
            Shape::Circle(Circle::new("0;0", 5.0)),
            red(Line::new("1;1", "2;2")),
        ]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());

        let stats = driver.open_file(Path::new("a.json")).unwrap();
        assert_eq!(stats, RenderStats { drawn: 1, skipped: 2 });
    }

    #[test]
    fn test_resize_reuses_shapes() {
        let source = FixedSource::new(vec![red(Line::new("100;0", "0;0"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());
        driver.open_file(Path::new("a.json")).unwrap();

        driver.resize(Size::new(400.0, 300.0)).unwrap();
        assert_eq!(driver.source.reads.get(), 1);

        let primitive = driver.viewport().primitives()[0];
        let graphview_core::DeviceGeometry::Line(line) = primitive.geometry else {
            panic!("expected a line");
        };
        // Half-size canvas: scale 0.5, center (200, 150).
        assert!((line.p0.x - 250.0).abs() < f64::EPSILON);
        assert!((line.p1.x - 200.0).abs() < f64::EPSILON);
        assert_eq!(driver.viewport().canvas(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_resize_while_idle_only_records_size() {
        let mut driver = RenderDriver::new(FixedSource::new(vec![]), SceneRecorder::new(), &config());
        let stats = driver.resize(Size::new(100.0, 100.0)).unwrap();
        assert_eq!(stats, RenderStats::default());
        assert_eq!(driver.canvas_size(), Size::new(100.0, 100.0));
        assert_eq!(driver.viewport().frames(), 0);
    }

    #[test]
    fn test_degenerate_resize_keeps_scene() {
        let source = FixedSource::new(vec![red(Line::new("0;0", "1;1"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());
        driver.open_file(Path::new("a.json")).unwrap();

        let err = driver.resize(Size::new(0.0, 300.0)).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateCanvas(_)));
        assert_eq!(driver.viewport().primitives().len(), 1);
        assert_eq!(driver.viewport().frames(), 1);
    }

    #[test]
    fn test_degenerate_reference() {
        let config = config().with_reference_size(Size::ZERO);
        let source = FixedSource::new(vec![red(Line::new("0;0", "1;1"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config);
        assert!(matches!(
            driver.open_file(Path::new("a.json")),
            Err(RenderError::DegenerateReference(_))
        ));
    }

    #[test]
    fn test_failed_load_keeps_document() {
        let source = FixedSource::new(vec![red(Line::new("0;0", "1;1"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());
        driver.open_file(Path::new("a.json")).unwrap();

        let err = driver.open_file(Path::new("a.bad")).unwrap_err();
        assert_eq!(err.user_message(), "Unsupported file format: .bad");
        assert_eq!(driver.state(), DriverState::Loaded);
        assert_eq!(driver.shapes().len(), 1);
    }

    #[test]
    fn test_drain_processes_all_commands() {
        let source = FixedSource::new(vec![red(Line::new("0;0", "1;1"))]);
        let mut driver = RenderDriver::new(source, SceneRecorder::new(), &config());

        let result = driver.drain(vec![
            ViewerCommand::OpenFile("a.bad".into()),
            ViewerCommand::OpenFile("a.json".into()),
            ViewerCommand::Resize(Size::new(200.0, 100.0)),
        ]);
        assert!(matches!(result, Err(RenderError::Load(_))));
        assert_eq!(driver.state(), DriverState::Loaded);
        assert_eq!(driver.viewport().frames(), 2);
    }
}
