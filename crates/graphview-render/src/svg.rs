//! SVG viewport: serializes a render pass as a standalone SVG document.

use crate::viewport::Viewport;
use graphview_core::{DeviceGeometry, DeviceShape};
use kurbo::Size;
use peniko::Color;
use std::fmt::{self, Write};

/// Viewport that renders each pass to an SVG string.
#[derive(Debug, Clone, Default)]
pub struct SvgViewport {
    primitives: Vec<DeviceShape>,
    document: String,
}

impl SvgViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG document for the last presented pass (empty before the first).
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Viewport for SvgViewport {
    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn draw(&mut self, shape: &DeviceShape) {
        self.primitives.push(*shape);
    }

    fn present(&mut self, canvas: Size) {
        let mut svg = String::new();
        match write_document(&mut svg, canvas, &self.primitives) {
            Ok(()) => self.document = svg,
            Err(e) => log::error!("Failed to write SVG document: {}", e),
        }
    }
}

fn write_document(svg: &mut String, canvas: Size, primitives: &[DeviceShape]) -> fmt::Result {
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        canvas.width, canvas.height, canvas.width, canvas.height
    )?;
    for shape in primitives {
        let style = paint_attributes(shape);
        match shape.geometry {
            DeviceGeometry::Line(line) => writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                line.p0.x, line.p0.y, line.p1.x, line.p1.y, style
            )?,
            DeviceGeometry::Ellipse(rect) => {
                let center = rect.center();
                writeln!(
                    svg,
                    r#"  <ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" {}/>"#,
                    center.x,
                    center.y,
                    rect.width() / 2.0,
                    rect.height() / 2.0,
                    style
                )?
            }
            DeviceGeometry::Triangle(vertices) => {
                let points = vertices
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(svg, r#"  <polygon points="{}" {}/>"#, points, style)?
            }
            DeviceGeometry::Rect(rect) => writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                style
            )?,
        }
    }
    writeln!(svg, "</svg>")
}

fn rgb(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b)
}

/// Alpha as a fraction in `[0, 1]`.
fn opacity(color: Color) -> f64 {
    f64::from(color.to_rgba8().a) / 255.0
}

fn paint_attributes(shape: &DeviceShape) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}""#,
        rgb(shape.stroke),
        opacity(shape.stroke),
        shape.stroke_width
    );
    match shape.fill {
        Some(fill) => {
            attrs.push_str(&format!(
                r#" fill="{}" fill-opacity="{:.3}""#,
                rgb(fill),
                opacity(fill)
            ));
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    attrs
}
